// env_overrides.rs — XLS environment variable parsing
//
// Extends impl Config with the methods that read the XLS environment
// variable and apply its entries.  The variable holds a semicolon-separated
// list; each entry is either a switch cluster ("lR" — default switches) or
// a color override ("U=dark green" — display item key '=' color spec).
// Invalid entries are skipped; the environment must never make the tool
// unusable.

use crate::color::parse_color_spec;
use crate::environment_provider::EnvironmentProvider;

use super::{Attribute, Config, XLS_ENV_VAR_NAME};





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config — env var parsing methods
//
//  All methods in this block handle reading and applying the XLS
//  environment variable.  Separated from the main impl block for
//  readability.
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_env_overrides
    //
    //  Parse the XLS environment variable for color overrides and switch
    //  defaults.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub(super) fn apply_env_overrides(&mut self, provider: &dyn EnvironmentProvider) {
        let env_value = match provider.get_env_var(XLS_ENV_VAR_NAME) {
            Some(v) => v,
            None => return,
        };

        for entry_raw in env_value.split(';') {
            let entry = entry_raw.trim();
            if entry.is_empty() {
                continue;
            }

            match entry.split_once('=') {
                Some((key, value)) => self.apply_color_override(key.trim(), value.trim()),
                None => self.apply_switch_cluster(entry),
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_color_override
    //
    //  Apply a single "key=color spec" entry.  The key is a display item's
    //  single-char env key.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn apply_color_override(&mut self, key: &str, value: &str) {
        let mut chars = key.chars();
        let (Some(key_char), None) = (chars.next(), chars.next()) else {
            return;
        };

        let Some(attr) = Attribute::from_env_key(key_char) else {
            return;
        };

        if let Ok(spec) = parse_color_spec(value) {
            self.attributes[attr as usize] = spec;
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  apply_switch_cluster
    //
    //  Apply a cluster of default switch characters, e.g. "lR" or "-lR".
    //  Unknown characters are skipped.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn apply_switch_cluster(&mut self, cluster: &str) {
        for ch in cluster.trim_start_matches('-').chars() {
            let defaults = &mut self.switch_defaults;
            match ch {
                'a' => defaults.show_hidden         = Some(true),
                'A' => defaults.almost_all          = Some(true),
                'd' => defaults.directories_only    = Some(true),
                'D' => defaults.files_only          = Some(true),
                'F' => defaults.no_classify         = Some(true),
                'l' => defaults.long_format         = Some(true),
                'C' => defaults.no_color            = Some(true),
                'N' => defaults.numeric_permissions = Some(true),
                'R' => defaults.recursive           = Some(true),
                'n' => defaults.numeric_ids         = Some(true),
                'h' => defaults.human_readable      = Some(true),
                'r' => defaults.reverse_sort        = Some(true),
                '1' => defaults.one_per_line        = Some(true),
                _   => {}
            }
        }
    }
}
