use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use url::Url;

use gitopsctl::{AppError, BootstrapOptions, Disposition, ErrorHandler};

#[derive(Parser)]
#[command(name = "gitopsctl")]
#[command(version)]
#[command(about = "Bootstrap GitOps pipeline configuration for Kubernetes continuous delivery")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively collect and validate the GitOps pipeline configuration
    Bootstrap {
        /// URL of the GitOps configuration repository
        #[arg(long)]
        gitops_repo_url: Option<String>,
        /// URL of the service repository the pipeline builds
        #[arg(long)]
        service_repo_url: Option<String>,
        /// Path where pipeline resources will be written
        #[arg(long)]
        output: Option<PathBuf>,
        /// Kubernetes API server used to verify the sealed-secrets service
        #[arg(long)]
        api_server: Option<Url>,
    },
    /// Manage pipeline environments
    Environment {
        #[command(subcommand)]
        command: EnvironmentCommands,
    },
}

#[derive(Subcommand)]
enum EnvironmentCommands {
    /// Add a new environment to an existing pipeline configuration
    Add {
        /// Name of the environment to add
        #[arg(long)]
        env_name: String,
        /// Folder holding the pipeline configuration
        #[arg(long)]
        pipelines_folder: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Bootstrap { gitops_repo_url, service_repo_url, output, api_server } => {
            let opts = BootstrapOptions {
                gitops_repo_url,
                service_repo_url,
                output_path: output,
                api_server,
            };
            gitopsctl::bootstrap(opts).map(|answers| {
                println!("✅ Validated GitOps configuration for {}", answers.service_repo_url);
                println!("   Resources will be written to {}", answers.output_path.display());
                if let Some(service) = &answers.sealed_secrets {
                    println!("   Sealed secrets service: {service}");
                }
            })
        }
        Commands::Environment { command } => match command {
            EnvironmentCommands::Add { env_name, pipelines_folder } => {
                gitopsctl::environment_add(&env_name, &pipelines_folder).map(|()| {
                    println!(
                        "✅ Environment '{}' accepted for {}",
                        env_name,
                        pipelines_folder.display()
                    );
                })
            }
        },
    };

    if let Err(err) = result {
        match ErrorHandler::handle(Some(&err)) {
            // Interrupt: end immediately, no cleanup, no message.
            Disposition::Fatal => process::exit(1),
            Disposition::Logged | Disposition::Clean => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
    }
}
