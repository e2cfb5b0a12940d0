use std::path::PathBuf;

use clap::Parser;

use crate::config::RenderConfig;
use crate::report::OutputFormat;

#[derive(Parser)]
#[command(
    name = "imgdelta",
    about = "Compare two images and report the percentage of differing pixels"
)]
pub struct Cli {
    /// First image (reference)
    #[arg(long = "input-image1-file", visible_alias = "input_image1_file")]
    pub input_image1_file: PathBuf,

    /// Second image (candidate)
    #[arg(long = "input-image2-file", visible_alias = "input_image2_file")]
    pub input_image2_file: PathBuf,

    /// Write a side-by-side composite of both inputs and the difference
    #[arg(long = "output-image-file", visible_alias = "output_image_file")]
    pub output_image_file: Option<PathBuf>,

    /// Write the difference mask (only when the images differ)
    #[arg(long = "delta-image-file", visible_alias = "delta_image_file")]
    pub delta_image_file: Option<PathBuf>,

    /// Result format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (default: ./imgdelta.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log comparison details
    #[arg(long, short = 'v')]
    pub verbose: bool,

    #[command(flatten)]
    pub render: RenderConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Layout;

    #[test]
    fn accepts_snake_case_aliases() {
        let cli = Cli::try_parse_from([
            "imgdelta",
            "--input_image1_file",
            "a.png",
            "--input_image2_file",
            "b.png",
            "--output_image_file",
            "out.png",
        ])
        .unwrap();
        assert_eq!(cli.input_image1_file, PathBuf::from("a.png"));
        assert_eq!(cli.output_image_file, Some(PathBuf::from("out.png")));
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn render_flags_flatten() {
        let cli = Cli::try_parse_from([
            "imgdelta",
            "--input-image1-file",
            "a.png",
            "--input-image2-file",
            "b.png",
            "--layout",
            "vertical",
            "--font-size",
            "20",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.render.layout, Some(Layout::Vertical));
        assert_eq!(cli.render.font_size, Some(20.0));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn both_inputs_required() {
        assert!(Cli::try_parse_from(["imgdelta", "--input-image1-file", "a.png"]).is_err());
    }
}
