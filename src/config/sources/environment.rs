//! Environment overrides: `BEARLINT_LOGGING__LEVEL=debug`,
//! `BEARLINT_SECTIONS__DEFAULT__BEARS=KeywordBear,LineLengthBear`. Lists of
//! other sections arrive as strings and are split when the section is read.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("BEARLINT")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("sections.default.bears")
            .with_list_parse_key("sections.default.files")
            .with_list_parse_key("sections.default.ignore")
            .try_parsing(true),
    )
}
