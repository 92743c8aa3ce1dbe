use crate::config::Config;
use crate::vcap::{ServiceCatalog, COMPLIMENT_KEY, COMPLIMENT_SERVICE};

pub(super) fn hello(config: &Config) -> Vec<u8> {
    [&b"hello "[..], &config.name[..], b"\n"].concat()
}

pub(super) fn goodbye(config: &Config) -> Vec<u8> {
    [&b"goodbye "[..], &config.name[..], b"\n"].concat()
}

pub(super) fn goodbye_v1(config: &Config) -> Vec<u8> {
    [&b"goodbye from v1 "[..], &config.name[..], b"\n"].concat()
}

// The catalog is decoded on every request; the raw bytes are echoed back untouched.
pub(super) fn hello_with_services(config: &Config) -> Vec<u8> {
    let catalog = ServiceCatalog::parse_or_default(&config.vcap_services);
    [
        &b"hello "[..],
        &config.name[..],
        b", you are ",
        catalog
            .credential(COMPLIMENT_SERVICE, COMPLIMENT_KEY)
            .as_bytes(),
        b"!\nYou have these services: ",
        &config.vcap_services[..],
    ]
    .concat()
}

pub(super) fn hello_with_reminder(config: &Config) -> Vec<u8> {
    let reminder = &config.reminder;
    [
        &hello_with_services(config)[..],
        b".\nDid you remember to ",
        &reminder.verb[..],
        b" your ",
        &reminder.animal_type[..],
        b" named ",
        &reminder.animal_name[..],
        b" at ",
        &reminder.hour[..],
        b":",
        &reminder.minute[..],
        b"?\n",
    ]
    .concat()
}
