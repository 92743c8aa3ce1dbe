use fixture_apps::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fixture_apps::run(App::ReminderGreeter).await
}
