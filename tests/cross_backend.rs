mod common;

use common::{HardwareHostDto, kiosk, parse, to_text};
use simpleserial::{
    Document, Format, load,
    backend::{
        arena::{ArenaDocument, ArenaXml},
        dom::DomXml,
        ptree::PtreeXml,
    },
};

fn load_host<D: Document>(document: &D) -> HardwareHostDto {
    let mut host = HardwareHostDto::default();
    load(document, "HardwareHost", &mut host).unwrap();
    host
}

fn load_with_every_xml_backend(text: &str) -> [HardwareHostDto; 3] {
    [
        load_host(&parse::<DomXml>(text)),
        load_host(&parse::<ArenaXml>(text)),
        load_host(&parse::<PtreeXml>(text)),
    ]
}

#[test]
fn dom_output_loads_everywhere() {
    for host in load_with_every_xml_backend(&to_text::<DomXml>(&kiosk())) {
        assert_eq!(host, kiosk());
    }
}

#[test]
fn arena_output_loads_everywhere() {
    for host in load_with_every_xml_backend(&to_text::<ArenaXml>(&kiosk())) {
        assert_eq!(host, kiosk());
    }
}

#[test]
fn ptree_output_loads_everywhere() {
    for host in load_with_every_xml_backend(&to_text::<PtreeXml>(&kiosk())) {
        assert_eq!(host, kiosk());
    }
}

#[test]
fn empty_list_loads_everywhere() {
    let host = HardwareHostDto {
        hardware_list: Vec::new(),
        ..kiosk()
    };

    for loaded in load_with_every_xml_backend(&to_text::<ArenaXml>(&host)) {
        assert_eq!(loaded, host);
        assert!(loaded.hardware_list.is_empty());
    }
}

#[test]
fn xml_backends_build_the_same_shape() {
    let dom = parse::<DomXml>(&to_text::<DomXml>(&kiosk()));
    let arena = parse::<ArenaXml>(&to_text::<ArenaXml>(&kiosk()));
    let ptree = parse::<PtreeXml>(&to_text::<PtreeXml>(&kiosk()));

    let mut dom_text = Vec::new();
    let mut arena_text = Vec::new();
    let mut ptree_text = Vec::new();
    DomXml::write(&mut dom_text, &dom).unwrap();
    ArenaXml::write(&mut arena_text, &arena).unwrap();
    PtreeXml::write(&mut ptree_text, &ptree).unwrap();

    let strip = |text: Vec<u8>| {
        let text = String::from_utf8(text).unwrap();
        let body = text.split_once("?>").map_or(text.as_str(), |(_, body)| body);
        body.split_whitespace().collect::<String>()
    };
    assert_eq!(strip(dom_text.clone()), strip(arena_text));
    assert_eq!(strip(dom_text), strip(ptree_text));
}

#[test]
fn arena_document_keeps_names_and_order() {
    let document = parse::<ArenaXml>(&to_text::<DomXml>(&kiosk()));
    let host = document.find_element(ArenaDocument::ROOT, "HardwareHost").unwrap();

    let names: Vec<&str> = document.elements(host).filter_map(|node| document.name(node)).collect();
    assert_eq!(names, ["HardwareHostID", "BranchID", "HardwareHostFriendlyName", "HardwareList"]);

    let list = document.find_element(host, "HardwareList").unwrap();
    let first = document.elements(list).next().unwrap();
    let id = document.find_element(first, "HardwareID").unwrap();
    assert_eq!(document.text(id), "2");
}
