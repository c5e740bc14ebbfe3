// config/mod.rs — Display color configuration and XLS env var overrides
//
// Owns the color assignment for every display item, the fixed per-file-type
// and per-permission color tables, and the default switch states parsed
// from the XLS environment variable.
//
// Module structure:
//   mod.rs           — Attribute enum, Config, fixed color tables
//   env_overrides.rs — XLS environment variable parsing

mod env_overrides;

use crate::color::{Color, ColorSpec, ColorStyle};
use crate::environment_provider::EnvironmentProvider;
use crate::file_info::FileType;





/// Environment variable name
pub const XLS_ENV_VAR_NAME: &str = "XLS";





////////////////////////////////////////////////////////////////////////////////

/// Display item attribute indices — determines what color is used for each
/// field of a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Attribute {
    Default   = 0,
    Header    = 1,
    LinkCount = 2,
    User      = 3,
    Group     = 4,
    Size      = 5,
    ModTime   = 6,
    Indicator = 7,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Attribute
//
//  Attribute enum utility methods and constants.
//
////////////////////////////////////////////////////////////////////////////////

impl Attribute {
    pub const COUNT: usize = 8;

    /// All attribute variants in order, for iteration.
    pub const ALL: [Attribute; Self::COUNT] = [
        Attribute::Default,
        Attribute::Header,
        Attribute::LinkCount,
        Attribute::User,
        Attribute::Group,
        Attribute::Size,
        Attribute::ModTime,
        Attribute::Indicator,
    ];

    ////////////////////////////////////////////////////////////////////////////
    //
    //  name
    //
    //  Get the display name of this attribute.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Default   => "Default",
            Attribute::Header    => "Header",
            Attribute::LinkCount => "LinkCount",
            Attribute::User      => "User",
            Attribute::Group     => "Group",
            Attribute::Size      => "Size",
            Attribute::ModTime   => "ModTime",
            Attribute::Indicator => "Indicator",
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_key
    //
    //  Single-char key used in the XLS env var for color overrides.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn env_key(&self) -> char {
        match self {
            Attribute::Default   => 'F',
            Attribute::Header    => 'H',
            Attribute::LinkCount => 'L',
            Attribute::User      => 'U',
            Attribute::Group     => 'G',
            Attribute::Size      => 'S',
            Attribute::ModTime   => 'T',
            Attribute::Indicator => 'I',
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_env_key
    //
    //  Lookup attribute by its single-char env var key.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_env_key(key: char) -> Option<Attribute> {
        Attribute::ALL.iter().copied().find(|a| a.env_key() == key)
    }
}





////////////////////////////////////////////////////////////////////////////////

/// Default switch states parsed from the XLS environment variable.  None
/// means the variable did not mention the switch; the command line always
/// wins over these.
#[derive(Debug, Clone, Default)]
pub struct SwitchDefaults {
    pub show_hidden:         Option<bool>, // a
    pub almost_all:          Option<bool>, // A
    pub directories_only:    Option<bool>, // d
    pub files_only:          Option<bool>, // D
    pub no_classify:         Option<bool>, // F
    pub long_format:         Option<bool>, // l
    pub no_color:            Option<bool>, // C
    pub numeric_permissions: Option<bool>, // N
    pub recursive:           Option<bool>, // R
    pub numeric_ids:         Option<bool>, // n
    pub human_readable:      Option<bool>, // h
    pub reverse_sort:        Option<bool>, // r
    pub one_per_line:        Option<bool>, // 1
}





////////////////////////////////////////////////////////////////////////////////

/// Immutable display configuration, constructed once at startup and passed
/// explicitly to everything that renders.
pub struct Config {
    pub attributes:      [ColorSpec; Attribute::COUNT],
    pub switch_defaults: SwitchDefaults,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Config
//
//  Construction, attribute access, and the fixed color tables.
//
////////////////////////////////////////////////////////////////////////////////

impl Config {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  initialize
    //
    //  Build the default configuration, then apply XLS env var overrides.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn initialize(provider: &dyn EnvironmentProvider) -> Self {
        let mut config = Config::with_default_colors();
        config.apply_env_overrides(provider);
        config
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  with_default_colors
    //
    //  The built-in display item palette.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn with_default_colors() -> Self {
        let mut attributes = [ColorSpec::new(Color::White, ColorStyle::Light); Attribute::COUNT];

        attributes[Attribute::Default as usize]   = ColorSpec::new(Color::White, ColorStyle::Light);
        attributes[Attribute::Header as usize]    = ColorSpec::new(Color::White, ColorStyle::Light);
        attributes[Attribute::LinkCount as usize] = ColorSpec::new(Color::White, ColorStyle::Normal);
        attributes[Attribute::User as usize]      = ColorSpec::new(Color::Green, ColorStyle::Normal);
        attributes[Attribute::Group as usize]     = ColorSpec::new(Color::Green, ColorStyle::Normal);
        attributes[Attribute::Size as usize]      = ColorSpec::new(Color::White, ColorStyle::Normal);
        attributes[Attribute::ModTime as usize]   = ColorSpec::new(Color::Red, ColorStyle::Normal);
        attributes[Attribute::Indicator as usize] = ColorSpec::new(Color::Red, ColorStyle::Light);

        Config {
            attributes,
            switch_defaults: SwitchDefaults::default(),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  attribute
    //
    //  Resolved color for a display item.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn attribute(&self, attr: Attribute) -> ColorSpec {
        self.attributes[attr as usize]
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  file_type_color
    //
    //  Fixed name color per file type.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn file_type_color(file_type: FileType) -> ColorSpec {
        match file_type {
            FileType::Block      => ColorSpec::new(Color::Blue, ColorStyle::Normal),
            FileType::Char       => ColorSpec::new(Color::Green, ColorStyle::Normal),
            FileType::Directory  => ColorSpec::new(Color::Brown, ColorStyle::Light),
            FileType::Fifo       => ColorSpec::new(Color::Brown, ColorStyle::Normal),
            FileType::Link       => ColorSpec::new(Color::Blue, ColorStyle::Light),
            FileType::Socket     => ColorSpec::new(Color::White, ColorStyle::Normal),
            FileType::Whiteout   => ColorSpec::new(Color::Red, ColorStyle::Light),
            FileType::Executable => ColorSpec::new(Color::Cyan, ColorStyle::Light),
            FileType::Regular | FileType::Unknown => {
                ColorSpec::new(Color::White, ColorStyle::Light)
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  type_glyph_color
    //
    //  Fixed color for the leading mode glyph in long format.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn type_glyph_color(glyph: char) -> ColorSpec {
        match glyph {
            'd' => ColorSpec::new(Color::Magenta, ColorStyle::Light),
            'c' => ColorSpec::new(Color::Brown, ColorStyle::Light),
            'b' => ColorSpec::new(Color::Red, ColorStyle::Light),
            _   => ColorSpec::new(Color::White, ColorStyle::Light),
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  permission_color
    //
    //  Fixed color per rendered rwx triad.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn permission_color(triad: &str) -> ColorSpec {
        let color = match triad {
            "r--" => Color::Green,
            "rw-" => Color::Blue,
            "rwx" => Color::Cyan,
            "r-x" => Color::Brown,
            _     => Color::White,
        };
        ColorSpec::new(color, ColorStyle::Light)
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  numeric_permission_color
    //
    //  Fixed color per octal permission value 0-7.  The assignment is
    //  historical; keep it as is.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn numeric_permission_color(value: u8) -> ColorSpec {
        match value {
            0 => ColorSpec::new(Color::Red, ColorStyle::Light),
            1 => ColorSpec::new(Color::Green, ColorStyle::Dark),
            2 => ColorSpec::new(Color::Brown, ColorStyle::Dark),
            3 => ColorSpec::new(Color::Magenta, ColorStyle::Light),
            4 => ColorSpec::new(Color::Green, ColorStyle::Light),
            5 => ColorSpec::new(Color::Brown, ColorStyle::Light),
            6 => ColorSpec::new(Color::Blue, ColorStyle::Light),
            7 => ColorSpec::new(Color::Cyan, ColorStyle::Light),
            _ => ColorSpec::new(Color::White, ColorStyle::Light),
        }
    }
}





#[cfg(test)]
mod tests {
    use super::*;

    ////////////////////////////////////////////////////////////////////////////
    //
    //  attribute_env_keys_are_unique
    //
    //  Verifies every attribute has a distinct env var key.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn attribute_env_keys_are_unique() {
        let mut keys: Vec<char> = Attribute::ALL.iter().map(|a| a.env_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Attribute::COUNT);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  env_key_roundtrip
    //
    //  Verifies from_env_key inverts env_key for every attribute.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn env_key_roundtrip() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_env_key(attr.env_key()), Some(attr));
        }
        assert_eq!(Attribute::from_env_key('Z'), None);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  default_colors
    //
    //  Spot-checks the built-in palette.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn default_colors() {
        let config = Config::with_default_colors();
        assert_eq!(
            config.attribute(Attribute::User),
            ColorSpec::new(Color::Green, ColorStyle::Normal)
        );
        assert_eq!(
            config.attribute(Attribute::ModTime),
            ColorSpec::new(Color::Red, ColorStyle::Normal)
        );
        assert_eq!(
            config.attribute(Attribute::Indicator),
            ColorSpec::new(Color::Red, ColorStyle::Light)
        );
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  numeric_permission_table
    //
    //  The 0-7 color assignment is fixed; pin it down.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn numeric_permission_table() {
        assert_eq!(
            Config::numeric_permission_color(0),
            ColorSpec::new(Color::Red, ColorStyle::Light)
        );
        assert_eq!(
            Config::numeric_permission_color(1),
            ColorSpec::new(Color::Green, ColorStyle::Dark)
        );
        assert_eq!(
            Config::numeric_permission_color(2),
            ColorSpec::new(Color::Brown, ColorStyle::Dark)
        );
        assert_eq!(
            Config::numeric_permission_color(3),
            ColorSpec::new(Color::Magenta, ColorStyle::Light)
        );
        assert_eq!(
            Config::numeric_permission_color(4),
            ColorSpec::new(Color::Green, ColorStyle::Light)
        );
        assert_eq!(
            Config::numeric_permission_color(5),
            ColorSpec::new(Color::Brown, ColorStyle::Light)
        );
        assert_eq!(
            Config::numeric_permission_color(6),
            ColorSpec::new(Color::Blue, ColorStyle::Light)
        );
        assert_eq!(
            Config::numeric_permission_color(7),
            ColorSpec::new(Color::Cyan, ColorStyle::Light)
        );
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  executable_directories_do_not_share_colors
    //
    //  Directory and executable names must remain visually distinct.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn executable_directories_do_not_share_colors() {
        assert_ne!(
            Config::file_type_color(FileType::Directory),
            Config::file_type_color(FileType::Executable)
        );
    }
}
