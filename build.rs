use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";
const REQUIRED_SECTIONS: [&str; 2] = ["paths", "output"];

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let source = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("cannot read {DEFAULT_CONFIG}: {e}"));

    let table = match source.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("{DEFAULT_CONFIG} is not valid TOML: {e}"),
    };

    for section in REQUIRED_SECTIONS {
        if !table.get(section).is_some_and(toml::Value::is_table) {
            panic!("{DEFAULT_CONFIG} is missing the [{section}] table");
        }
    }
}
