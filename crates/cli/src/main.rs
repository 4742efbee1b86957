use clap::{Parser, Subcommand};
use fleetsnap_aws::AwsCompute;

mod commands {
    pub mod list_instances;
    pub mod list_snapshots;
    pub mod list_volumes;
    pub mod snapshot;
    pub mod start;
    pub mod stop;
}

#[derive(Parser)]
#[command(name = "fleetsnap")]
#[command(about = "Manages EC2 instance fleet snapshots", long_about = None)]
struct Cli {
    /// Named credentials profile to use
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Region override; defaults to the profile's region
    #[arg(long, global = true)]
    region: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commands for volumes
    #[command(subcommand)]
    Volumes(VolumeCommands),

    /// Commands for snapshots
    #[command(subcommand)]
    Snapshots(SnapshotCommands),

    /// Commands for instances
    #[command(subcommand)]
    Instances(InstanceCommands),
}

#[derive(Subcommand)]
enum VolumeCommands {
    /// List volumes
    List {
        /// Only volumes of instances tagged Project:<name>
        #[arg(long)]
        project: Option<String>,
    },
}

#[derive(Subcommand)]
enum SnapshotCommands {
    /// List snapshots
    List {
        /// Only snapshots of instances tagged Project:<name>
        #[arg(long)]
        project: Option<String>,

        /// List all snapshots, not just the most recent per volume
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
enum InstanceCommands {
    /// List instances
    List {
        /// Only instances tagged Project:<name>
        #[arg(long)]
        project: Option<String>,
    },

    /// Stop instances, snapshot all their volumes, start them again
    Snapshot {
        /// Only instances tagged Project:<name>
        #[arg(long)]
        project: Option<String>,

        /// Seconds to wait for each stop/start to settle
        #[arg(long, default_value_t = 600)]
        wait_timeout: u64,
    },

    /// Start instances
    Start {
        /// Only instances tagged Project:<name>
        #[arg(long)]
        project: Option<String>,
    },

    /// Stop instances
    Stop {
        /// Only instances tagged Project:<name>
        #[arg(long)]
        project: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let aws = AwsCompute::new(cli.profile.as_deref(), cli.region.as_deref()).await;

    match cli.command {
        Commands::Volumes(VolumeCommands::List { project }) => {
            commands::list_volumes::list_volumes(&aws, project.as_deref()).await?
        }

        Commands::Snapshots(SnapshotCommands::List { project, all }) => {
            commands::list_snapshots::list_snapshots(&aws, project.as_deref(), all).await?
        }

        Commands::Instances(InstanceCommands::List { project }) => {
            commands::list_instances::list_instances(&aws, project.as_deref()).await?
        }

        Commands::Instances(InstanceCommands::Snapshot {
            project,
            wait_timeout,
        }) => {
            commands::snapshot::create_snapshots(&aws, project.as_deref(), wait_timeout).await?
        }

        Commands::Instances(InstanceCommands::Start { project }) => {
            commands::start::start_instances(&aws, project.as_deref()).await?
        }

        Commands::Instances(InstanceCommands::Stop { project }) => {
            commands::stop::stop_instances(&aws, project.as_deref()).await?
        }
    }

    Ok(())
}
