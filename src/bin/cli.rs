use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use raspepix::authz::{AdminPermissionSet, PageTag, PermissionEvaluator};
use raspepix::docs;

#[derive(Parser, Debug)]
#[command(author, version, about = "raspepix admin tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate an admin_data payload against one or more page tags
    Check {
        /// Raw admin_data JSON
        #[arg(long, conflicts_with = "file")]
        data: Option<String>,
        /// File holding the admin_data JSON
        #[arg(long)]
        file: Option<PathBuf>,
        /// Page tag to test; several tags are checked as "any of"
        #[arg(long = "tag", required = true)]
        tags: Vec<String>,
    },
    /// List the admin page tags
    Tags,
    /// Write the OpenAPI document to a file
    Openapi {
        #[arg(long, default_value = "openapi.json")]
        out: PathBuf,
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    if dotenvy::dotenv().is_err() {
        let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        let _ = dotenvy::from_path(crate_env);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { data, file, tags } => {
            let raw = match (data, file) {
                (Some(data), _) => data,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                (None, None) => anyhow::bail!("either --data or --file is required"),
            };

            // Surface decode problems here; the server would silently deny.
            if let Err(err) = AdminPermissionSet::from_json(&raw) {
                eprintln!("warning: admin_data does not decode at {}: {}", err.path(), err.inner());
            }

            let evaluator = PermissionEvaluator::from_cookie(Some(&raw));
            let allowed = if tags.len() == 1 {
                evaluator.has_permission(&tags[0])
            } else {
                evaluator.has_any_permission(tags.as_slice())
            };

            println!("{:<10} {}", "tags", tags.join(","));
            println!("{:<10} {}", "allowed", allowed);
            println!("{:<10} {}", "is_admin", evaluator.is_admin());
        }
        Commands::Tags => {
            for tag in PageTag::ALL {
                println!("{}", tag);
            }
        }
        Commands::Openapi { out, port } => {
            docs::write_openapi(&out, port)?;
            println!("wrote {}", out.display());
        }
    }

    Ok(())
}
