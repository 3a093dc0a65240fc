//! Saves a hardware host through every bundled backend, writes it to disk, reads it back and prints it.
//!
//! Run with `cargo run --example roundtrip`. Files land in the system temp directory.

use std::{error::Error, path::Path};

use simpleserial::{
    Archive, Describe, Format,
    backend::{
        arena::ArenaXml,
        dom::DomXml,
        ptree::{PtreeJson, PtreeXml},
    },
    load, make_ncp, make_nvp, read_file, save, write_file,
};

#[derive(Debug, Default)]
struct HardwareDto {
    hardware_host_id: i32,
    hardware_id: i32,
    hardware_friendly_name: String,
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

#[derive(Debug, Default)]
struct HardwareHostDto {
    hardware_host_id: i32,
    branch_id: i32,
    hardware_host_friendly_name: String,
    hardware_list: Vec<HardwareDto>,
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

fn roundtrip<F: Format>(path: &Path) -> Result<(), Box<dyn Error>>
where
    F::Error: Error + 'static,
{
    let mut host = HardwareHostDto {
        hardware_host_id: 1,
        branch_id: 1,
        hardware_host_friendly_name: String::from("kiosk"),
        hardware_list: vec![
            HardwareDto {
                hardware_host_id: 1,
                hardware_id: 2,
                hardware_friendly_name: String::from("friendly"),
            },
            HardwareDto {
                hardware_host_id: 3,
                hardware_id: 4,
                hardware_friendly_name: String::from("name"),
            },
        ],
    };

    let mut document = F::Document::default();
    save(&mut document, "HardwareHost", &mut host)?;
    write_file::<F, _>(path, &document)?;

    let document = read_file::<F, _>(path)?;
    let mut loaded = HardwareHostDto::default();
    load(&document, "HardwareHost", &mut loaded)?;

    println!("{} ({})", F::name(), path.display());
    println!("Read back: {}", loaded.hardware_host_id);
    println!("Read back: {}", loaded.branch_id);
    println!("Read back: {}", loaded.hardware_host_friendly_name);
    for hardware in &loaded.hardware_list {
        println!("Item: {}, {}, {}", hardware.hardware_id, hardware.hardware_host_id, hardware.hardware_friendly_name);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let directory = std::env::temp_dir();

    roundtrip::<DomXml>(&directory.join("test-dom.xml"))?;
    roundtrip::<ArenaXml>(&directory.join("test-arena.xml"))?;
    roundtrip::<PtreeJson>(&directory.join("test-ptree.json"))?;
    roundtrip::<PtreeXml>(&directory.join("test-ptree.xml"))?;

    Ok(())
}
