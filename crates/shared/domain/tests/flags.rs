use wfh_domain::constants::MESSAGE_KEYS;
use wfh_domain::flags::SettingsFlags;

#[test]
fn each_message_key_maps_to_one_bit() {
    for key in MESSAGE_KEYS {
        let flag = SettingsFlags::from(key);
        assert_eq!(flag.bits().count_ones(), 1, "{key}");
        assert_eq!(flag.message_key(), Some(key));
    }
}

#[test]
fn unknown_keys_and_composites_have_no_key() {
    assert!(SettingsFlags::from("show_seconds").is_empty());
    assert_eq!(SettingsFlags::ALL.message_key(), None);
    assert_eq!(SettingsFlags::empty().message_key(), None);
}

#[test]
fn all_covers_every_message_key() {
    let combined = MESSAGE_KEYS
        .iter()
        .fold(SettingsFlags::empty(), |acc, key| acc | SettingsFlags::from(*key));
    assert_eq!(combined, SettingsFlags::ALL);
}
