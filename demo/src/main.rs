use std::path::PathBuf;

use appstream::Component;

fn main() {
    let component = Component::from_path(PathBuf::from("test.xml")).unwrap();
    println!("{:#?}", component);
}
