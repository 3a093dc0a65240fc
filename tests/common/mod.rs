#![allow(dead_code)]

use simpleserial::{Archive, Describe, Format, load, make_ncp, make_nvp, save};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HardwareDto {
    pub hardware_host_id: i32,
    pub hardware_id: i32,
    pub hardware_friendly_name: String,
}

impl Describe for HardwareDto {
    fn describe<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error> {
        archive
            .visit(make_nvp("HardwareHostID", &mut self.hardware_host_id))?
            .visit(make_nvp("HardwareID", &mut self.hardware_id))?
            .visit(make_nvp("HardwareFriendlyName", &mut self.hardware_friendly_name))?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HardwareHostDto {
    pub hardware_host_id: i32,
    pub branch_id: i32,
    pub hardware_host_friendly_name: String,
    pub hardware_list: Vec<HardwareDto>,
}

impl Describe for HardwareHostDto {
    fn describe<A: Archive>(&mut self, archive: &mut A) -> Result<(), A::Error> {
        archive
            .visit(make_nvp("HardwareHostID", &mut self.hardware_host_id))?
            .visit(make_nvp("BranchID", &mut self.branch_id))?
            .visit(make_nvp("HardwareHostFriendlyName", &mut self.hardware_host_friendly_name))?
            .visit(make_ncp("HardwareList", "Hardware", &mut self.hardware_list))?;
        Ok(())
    }
}

pub fn hardware(hardware_host_id: i32, hardware_id: i32, name: &str) -> HardwareDto {
    HardwareDto {
        hardware_host_id,
        hardware_id,
        hardware_friendly_name: name.to_string(),
    }
}

pub fn kiosk() -> HardwareHostDto {
    HardwareHostDto {
        hardware_host_id: 1,
        branch_id: 1,
        hardware_host_friendly_name: String::from("kiosk"),
        hardware_list: vec![hardware(1, 2, "friendly"), hardware(3, 4, "name")],
    }
}

/// Saves `host`, writes it out with `F`, reads it back and loads it.
pub fn roundtrip<F: Format>(host: &HardwareHostDto) -> HardwareHostDto
where
    F::Error: std::fmt::Debug,
{
    let mut source = host.clone();
    let mut document = F::Document::default();
    save(&mut document, "HardwareHost", &mut source).unwrap();

    let mut buffer = Vec::new();
    F::write(&mut buffer, &document).unwrap();

    let document = F::read(&mut buffer.as_slice()).unwrap();
    let mut loaded = HardwareHostDto::default();
    load(&document, "HardwareHost", &mut loaded).unwrap();
    loaded
}

pub fn to_text<F: Format>(host: &HardwareHostDto) -> String
where
    F::Error: std::fmt::Debug,
{
    let mut source = host.clone();
    let mut document = F::Document::default();
    save(&mut document, "HardwareHost", &mut source).unwrap();

    let mut buffer = Vec::new();
    F::write(&mut buffer, &document).unwrap();
    String::from_utf8(buffer).unwrap()
}

pub fn parse<F: Format>(text: &str) -> F::Document
where
    F::Error: std::fmt::Debug,
{
    F::read(&mut text.as_bytes()).unwrap()
}
