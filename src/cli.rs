use crate::image::filter::sobel::MagnitudeOverflow;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_file_argument(command);
        let command = Self::register_output_file_argument(command);
        let command = Self::register_threshold_argument(command);
        Self::register_overflow_argument(command)
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_threshold_argument(command: Command) -> Command {
        command.arg(Self::create_threshold_argument())
    }

    fn register_overflow_argument(command: Command) -> Command {
        command.arg(Self::create_overflow_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to 24-bit bitmap input file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to bitmap output file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_threshold_argument() -> Arg {
        arg!(-t --threshold <THRESHOLD> "Lowest value written for an edge pixel")
            .default_value("0")
            .value_parser(value_parser!(u32))
    }

    fn create_overflow_argument() -> Arg {
        arg!(-o --overflow <POLICY> "How gradient magnitudes above 255 are stored")
            .default_value("Wrap")
            .value_parser(value_parser!(MagnitudeOverflow))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_input_file_argument(matches),
            output_file: Self::extract_output_file_argument(matches),
            threshold: Self::extract_threshold_argument(matches),
            overflow: Self::extract_overflow_argument(matches),
        }
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_file")
            .expect("Required argument input_file not provided")
            .clone()
    }

    fn extract_output_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_file")
            .expect("Required argument output_file not provided")
            .clone()
    }

    fn extract_threshold_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("threshold")
            .expect("Threshold must be provided, but was unset.")
            .to_owned()
    }

    fn extract_overflow_argument(matches: &ArgMatches) -> MagnitudeOverflow {
        matches
            .get_one::<MagnitudeOverflow>("overflow")
            .expect("Overflow policy must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, MagnitudeOverflow};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.bmp";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches);
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_output_file_argument() {
        let output_file_name = "edges.bmp";
        let command = Command::new("test");
        let command = CLIParser::register_output_file_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, output_file_name]);
        let output_file = CLIParser::extract_output_file_argument(&matches);
        assert_eq!(output_file.file_name().unwrap(), output_file_name);
    }

    #[test]
    fn parse_threshold_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threshold_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threshold", "42"]);
        let threshold = CLIParser::extract_threshold_argument(&matches);
        assert_eq!(threshold, 42);
    }

    #[test]
    fn parse_negative_threshold_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threshold_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threshold=-5"]);
        assert!(result.is_err(), "Negative threshold not detected");
    }

    #[test]
    fn parse_overflow_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_overflow_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--overflow", "Clamp"]);
        let overflow = CLIParser::extract_overflow_argument(&matches);
        assert_eq!(overflow, MagnitudeOverflow::Clamp);
    }

    #[test]
    fn parse_overflow_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_overflow_argument(command);
        let result =
            command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--overflow", "Saturate"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for overflow not detected");
        }
    }

    #[test]
    fn parse_required_arguments_only() {
        let input_file_name = "inputfile.bmp";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let output_file_name = "outputfile.bmp";
        let output_file_path = format!("/output_directory/{}", output_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            &input_file_path,
            &output_file_path,
        ]);
        assert_eq!(
            arguments.input_file.file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.output_file.file_name().unwrap(),
            output_file_name,
            "output file does not match"
        );
        assert_eq!(arguments.threshold, 0, "threshold does not match");
        assert_eq!(
            arguments.overflow,
            MagnitudeOverflow::Wrap,
            "overflow does not match"
        );
    }
}
