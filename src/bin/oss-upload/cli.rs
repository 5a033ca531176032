// CLI argument definitions using clap

use clap::Parser;
use oss_upload::{AclMode, ConfigLayer, OutputMode};

/// Every flag overrides the matching `INPUT_*` variable and config file entry.
#[derive(Parser, Debug)]
#[command(name = "oss-upload")]
#[command(author = "hatlonely <hatlonely@foxmail.com>")]
#[command(version = "0.1.0")]
#[command(about = "Upload a directory tree to an S3 compatible bucket", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.oss-upload/config.yaml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Access key id
    #[arg(long)]
    pub aws_key_id: Option<String>,

    /// Secret access key
    #[arg(long)]
    pub aws_secret_access_key: Option<String>,

    /// Destination bucket
    #[arg(short, long)]
    pub aws_bucket: Option<String>,

    /// Bucket region (default: us-east-1)
    #[arg(short, long)]
    pub region: Option<String>,

    /// Local directory to upload
    #[arg(short, long)]
    pub source_dir: Option<String>,

    /// Key prefix, "/" generates a random one
    #[arg(short, long)]
    pub destination_dir: Option<String>,

    /// Custom endpoint for S3 compatible storage
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Use path-style requests ({endpoint}/{bucket}/{key})
    #[arg(long)]
    pub use_path_style_requests: bool,

    /// Report object keys or public URLs: keys | urls
    #[arg(long)]
    pub output_mode: Option<OutputMode>,

    /// Canned ACL for uploaded objects: none | private | public-read
    #[arg(long)]
    pub acl: Option<AclMode>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

impl Cli {
    /// Flags given on the command line, as the highest precedence config layer
    pub fn overrides(&self) -> ConfigLayer {
        ConfigLayer {
            aws_key_id: self.aws_key_id.clone(),
            aws_secret_access_key: self.aws_secret_access_key.clone(),
            aws_bucket: self.aws_bucket.clone(),
            region: self.region.clone(),
            source_dir: self.source_dir.clone(),
            destination_dir: self.destination_dir.clone(),
            endpoint: self.endpoint.clone(),
            use_path_style_requests: self.use_path_style_requests.then_some(true),
            output_mode: self.output_mode,
            acl: self.acl,
        }
    }
}
