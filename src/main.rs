use screenplay_bridge::{export_to_json, import_script};
use std::env;
use std::fs;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: {} <script_file> [export.json]", args[0]);
        return;
    }

    let file_path = &args[1];

    match fs::read_to_string(file_path) {
        Ok(content) => {
            match import_script(&content, Some(file_path)) {
                Ok(doc) => {
                    println!("Import complete!");
                    println!("Title: {}", doc.title);
                    println!("Scenes: {}", doc.scenes.len());
                    println!("Elements: {}", doc.element_count());
                    println!("Characters: {:?}", doc.characters);
                    println!("Locations: {:?}", doc.locations);

                    if let Some(out_path) = args.get(2) {
                        let json = export_to_json(&doc);
                        match fs::write(out_path, json) {
                            Ok(_) => println!("Export written to: {}", out_path),
                            Err(e) => println!("Failed to write export: {}", e),
                        }
                    }
                }
                Err(e) => {
                    println!("Import failed: {}", e);
                }
            }
        }
        Err(e) => {
            println!("Failed to read file: {}", e);
        }
    }
}
