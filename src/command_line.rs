// command_line.rs — CLI argument parsing (custom, no clap)
//
// Grouped short switches (-laR), GNU-style long switches (--recursive),
// and positional target paths.  Defaults from the XLS environment variable
// are applied first; explicit switches win.

use std::path::PathBuf;

use crate::config::Config;
use crate::ehm::AppError;

// ── CommandLine struct ────────────────────────────────────────────────────────

/// The fully resolved flag set handed to the collector and displayers.
#[derive(Debug, Clone)]
pub struct CommandLine {
    pub show_hidden:         bool, // -a
    pub almost_all:          bool, // -A
    pub directories_only:    bool, // -d
    pub files_only:          bool, // -D
    pub no_classify:         bool, // -F
    pub long_format:         bool, // -l
    pub no_color:            bool, // -C
    pub numeric_permissions: bool, // -N
    pub recursive:           bool, // -R
    pub numeric_ids:         bool, // -n
    pub human_readable:      bool, // -h
    pub reverse_sort:        bool, // -r
    pub one_per_line:        bool, // -1
    pub show_help:           bool,
    pub show_version:        bool,
    pub paths:               Vec<PathBuf>,
}

impl Default for CommandLine {
    fn default() -> Self {
        CommandLine {
            show_hidden:         false,
            almost_all:          false,
            directories_only:    false,
            files_only:          false,
            no_classify:         false,
            long_format:         false,
            no_color:            false,
            numeric_permissions: false,
            recursive:           false,
            numeric_ids:         false,
            human_readable:      false,
            reverse_sort:        false,
            one_per_line:        false,
            show_help:           false,
            show_version:        false,
            paths:               Vec::new(),
        }
    }
}

impl CommandLine {
    /// Apply switch defaults from Config (parsed from the XLS environment
    /// variable).  Env defaults are applied BEFORE command-line parsing
    /// overrides them.
    pub fn apply_config_defaults(&mut self, config: &Config) {
        let d = &config.switch_defaults;
        if let Some(v) = d.show_hidden         { self.show_hidden         = v; }
        if let Some(v) = d.almost_all          { self.almost_all          = v; }
        if let Some(v) = d.directories_only    { self.directories_only    = v; }
        if let Some(v) = d.files_only          { self.files_only          = v; }
        if let Some(v) = d.no_classify         { self.no_classify         = v; }
        if let Some(v) = d.long_format         { self.long_format         = v; }
        if let Some(v) = d.no_color            { self.no_color            = v; }
        if let Some(v) = d.numeric_permissions { self.numeric_permissions = v; }
        if let Some(v) = d.recursive           { self.recursive           = v; }
        if let Some(v) = d.numeric_ids         { self.numeric_ids         = v; }
        if let Some(v) = d.human_readable      { self.human_readable      = v; }
        if let Some(v) = d.reverse_sort        { self.reverse_sort        = v; }
        if let Some(v) = d.one_per_line        { self.one_per_line        = v; }
    }

    /// Parse command-line arguments on top of the current state.
    /// Args should NOT include argv[0] (program name).
    pub fn parse<I, S>(&mut self, args: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg_ref in args {
            let arg = arg_ref.as_ref();
            if arg.is_empty() {
                continue;
            }

            if let Some(long) = arg.strip_prefix("--") {
                self.handle_long_switch(long)?;
            } else if arg.len() > 1 && arg.starts_with('-') {
                // A cluster of short switches: -laR
                for ch in arg[1..].chars() {
                    self.handle_short_switch(ch)?;
                }
            } else {
                // Positional argument (target path); a bare "-" is a path
                self.paths.push(PathBuf::from(arg));
            }
        }

        Ok(())
    }

    /// Route a single short switch character.
    fn handle_short_switch(&mut self, ch: char) -> Result<(), AppError> {
        match ch {
            'a' => self.show_hidden         = true,
            'A' => self.almost_all          = true,
            'd' => self.directories_only    = true,
            'D' => self.files_only          = true,
            'F' => self.no_classify         = true,
            'l' => self.long_format         = true,
            'C' => self.no_color            = true,
            'N' => self.numeric_permissions = true,
            'R' => self.recursive           = true,
            'n' => self.numeric_ids         = true,
            'h' => self.human_readable      = true,
            'r' => self.reverse_sort        = true,
            '1' => self.one_per_line        = true,
            '?' => self.show_help           = true,
            _   => {
                return Err(AppError::InvalidArg(format!("invalid option -- '{}'", ch)));
            }
        }
        Ok(())
    }

    /// Route a long switch name.
    fn handle_long_switch(&mut self, name: &str) -> Result<(), AppError> {
        match name {
            "all"             => self.show_hidden         = true,
            "almost-all"      => self.almost_all          = true,
            "directory"       => self.directories_only    = true,
            "no-directories"  => self.files_only          = true,
            "no-classify"     => self.no_classify         = true,
            "no-color"        => self.no_color            = true,
            "num-perms"       => self.numeric_permissions = true,
            "recursive"       => self.recursive           = true,
            "numeric-uid-gid" => self.numeric_ids         = true,
            "human-readable"  => self.human_readable      = true,
            "reverse"         => self.reverse_sort        = true,
            "one-per-line"    => self.one_per_line        = true,
            "help"            => self.show_help           = true,
            "version"         => self.show_version        = true,
            _ => {
                return Err(AppError::InvalidArg(format!("unrecognized option '--{}'", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment_provider::MockEnvironmentProvider;

    fn parse(args: &[&str]) -> Result<CommandLine, AppError> {
        let mut cmd = CommandLine::default();
        cmd.parse(args.iter().copied())?;
        Ok(cmd)
    }

    #[test]
    fn no_args_means_defaults() {
        let cmd = parse(&[]).unwrap();
        assert!(!cmd.long_format);
        assert!(!cmd.recursive);
        assert!(cmd.paths.is_empty());
    }

    #[test]
    fn grouped_short_switches() {
        let cmd = parse(&["-laR"]).unwrap();
        assert!(cmd.long_format);
        assert!(cmd.show_hidden);
        assert!(cmd.recursive);
        assert!(!cmd.reverse_sort);
    }

    #[test]
    fn separate_short_switches_and_paths() {
        let cmd = parse(&["-l", "-h", "/tmp", "src"]).unwrap();
        assert!(cmd.long_format);
        assert!(cmd.human_readable);
        assert_eq!(cmd.paths, [PathBuf::from("/tmp"), PathBuf::from("src")]);
    }

    #[test]
    fn long_switches() {
        let cmd = parse(&["--recursive", "--almost-all", "--numeric-uid-gid"]).unwrap();
        assert!(cmd.recursive);
        assert!(cmd.almost_all);
        assert!(cmd.numeric_ids);
    }

    #[test]
    fn case_distinguishes_switches() {
        let cmd = parse(&["-d"]).unwrap();
        assert!(cmd.directories_only);
        assert!(!cmd.files_only);

        let cmd = parse(&["-D"]).unwrap();
        assert!(cmd.files_only);
        assert!(!cmd.directories_only);

        let cmd = parse(&["-n"]).unwrap();
        assert!(cmd.numeric_ids);
        assert!(!cmd.numeric_permissions);
    }

    #[test]
    fn one_per_line_and_reverse() {
        let cmd = parse(&["-1r"]).unwrap();
        assert!(cmd.one_per_line);
        assert!(cmd.reverse_sort);
    }

    #[test]
    fn help_and_version() {
        assert!(parse(&["--help"]).unwrap().show_help);
        assert!(parse(&["--version"]).unwrap().show_version);
        assert!(parse(&["-?"]).unwrap().show_help);
    }

    #[test]
    fn bare_dash_is_a_path() {
        let cmd = parse(&["-"]).unwrap();
        assert_eq!(cmd.paths, [PathBuf::from("-")]);
    }

    #[test]
    fn unknown_short_switch_is_an_error() {
        assert!(matches!(parse(&["-lx"]), Err(AppError::InvalidArg(_))));
    }

    #[test]
    fn unknown_long_switch_is_an_error() {
        assert!(matches!(parse(&["--frobnicate"]), Err(AppError::InvalidArg(_))));
    }

    #[test]
    fn env_defaults_applied_before_parse() {
        let mut mock = MockEnvironmentProvider::new();
        mock.set("XLS", "lh");
        let config = Config::initialize(&mock);

        let mut cmd = CommandLine::default();
        cmd.apply_config_defaults(&config);
        cmd.parse(["-R", "projects"]).unwrap();

        assert!(cmd.long_format);
        assert!(cmd.human_readable);
        assert!(cmd.recursive);
        assert_eq!(cmd.paths, [PathBuf::from("projects")]);
    }
}
