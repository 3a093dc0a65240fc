mod common;

use common::{HardwareHostDto, hardware, kiosk, roundtrip};
use simpleserial::{
    backend::{
        arena::ArenaXml,
        dom::DomXml,
        ptree::{PropertyTree, PtreeJson, PtreeXml},
    },
    load, read_file, save, write_file,
};

#[test]
fn dom_xml_roundtrip() {
    assert_eq!(roundtrip::<DomXml>(&kiosk()), kiosk());
}

#[test]
fn arena_xml_roundtrip() {
    assert_eq!(roundtrip::<ArenaXml>(&kiosk()), kiosk());
}

#[test]
fn ptree_json_roundtrip() {
    assert_eq!(roundtrip::<PtreeJson>(&kiosk()), kiosk());
}

#[test]
fn ptree_xml_roundtrip() {
    assert_eq!(roundtrip::<PtreeXml>(&kiosk()), kiosk());
}

#[test]
fn sequence_order_is_kept() {
    let mut host = kiosk();
    host.hardware_list = vec![hardware(1, 30, "c"), hardware(1, 10, "a"), hardware(1, 20, "b"), hardware(1, 10, "a")];

    assert_eq!(roundtrip::<DomXml>(&host).hardware_list, host.hardware_list);
    assert_eq!(roundtrip::<ArenaXml>(&host).hardware_list, host.hardware_list);
    assert_eq!(roundtrip::<PtreeJson>(&host).hardware_list, host.hardware_list);
    assert_eq!(roundtrip::<PtreeXml>(&host).hardware_list, host.hardware_list);
}

#[test]
fn empty_sequence_roundtrip() {
    let host = HardwareHostDto {
        hardware_list: Vec::new(),
        ..kiosk()
    };

    assert_eq!(roundtrip::<DomXml>(&host), host);
    assert_eq!(roundtrip::<ArenaXml>(&host), host);
    assert_eq!(roundtrip::<PtreeJson>(&host), host);
    assert_eq!(roundtrip::<PtreeXml>(&host), host);
}

#[test]
fn empty_strings_roundtrip() {
    let mut host = kiosk();
    host.hardware_host_friendly_name = String::new();
    host.hardware_list[1].hardware_friendly_name = String::new();

    assert_eq!(roundtrip::<DomXml>(&host), host);
    assert_eq!(roundtrip::<ArenaXml>(&host), host);
    assert_eq!(roundtrip::<PtreeJson>(&host), host);
    assert_eq!(roundtrip::<PtreeXml>(&host), host);
}

#[test]
fn whitespace_only_strings_roundtrip() {
    let mut host = kiosk();
    host.hardware_host_friendly_name = String::from("   ");
    host.hardware_list[0].hardware_friendly_name = String::from(" \t ");
    host.hardware_list[1].hardware_friendly_name = String::from(" name ");

    assert_eq!(roundtrip::<DomXml>(&host), host);
    assert_eq!(roundtrip::<ArenaXml>(&host), host);
    assert_eq!(roundtrip::<PtreeJson>(&host), host);
    assert_eq!(roundtrip::<PtreeXml>(&host), host);
}

#[test]
fn markup_in_text_roundtrip() {
    let mut host = kiosk();
    host.hardware_host_friendly_name = String::from("<kiosk & \"lobby\">");

    assert_eq!(roundtrip::<DomXml>(&host), host);
    assert_eq!(roundtrip::<ArenaXml>(&host), host);
    assert_eq!(roundtrip::<PtreeJson>(&host), host);
    assert_eq!(roundtrip::<PtreeXml>(&host), host);
}

#[test]
fn negative_integers_roundtrip() {
    let mut host = kiosk();
    host.branch_id = -42;
    host.hardware_list[0].hardware_id = i32::MIN;

    assert_eq!(roundtrip::<ArenaXml>(&host), host);
    assert_eq!(roundtrip::<PtreeJson>(&host), host);
}

#[test]
fn file_roundtrip() {
    let path = std::env::temp_dir().join(format!("simpleserial-file-roundtrip-{}.json", std::process::id()));

    let mut source = kiosk();
    let mut document = PropertyTree::new();
    save(&mut document, "HardwareHost", &mut source).unwrap();
    write_file::<PtreeJson, _>(&path, &document).unwrap();

    let document = read_file::<PtreeJson, _>(&path).unwrap();
    let mut loaded = HardwareHostDto::default();
    load(&document, "HardwareHost", &mut loaded).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded, kiosk());
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("simpleserial-this-file-does-not-exist.xml");
    let error = read_file::<ArenaXml, _>(&path).unwrap_err();
    assert!(matches!(error, simpleserial::backend::arena::ArenaXmlError::Io(_)));
}
