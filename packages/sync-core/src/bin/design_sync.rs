//! Design Sync CLI - synced projects from the command line.
//!
//! Runs the same workflows as the editor panel and prints JSON.

use clap::{Parser, Subcommand};
use design_sync_core::{
    create_with_ai, filter_projects, open_project, Config, Error, Notice, PanelHost, PanelState,
    SyncClient,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "design-sync")]
#[command(about = "Browse, open and generate synced design projects")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List synced projects
    List {
        /// Keep projects whose filename contains this text
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Download a project's document
    Open {
        /// Project id or exact filename
        project: String,
        /// Write the document here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a project with the AI service and save it
    Generate {
        /// Free-text prompt; the configured default when omitted
        prompt: Option<String>,
        /// Also write the generated document here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Headless host: keeps the panel state and the loaded document in memory.
struct ConsoleHost {
    panel: PanelState,
    document: Option<Value>,
}

impl PanelHost for ConsoleHost {
    fn update_panel(&mut self, f: impl FnOnce(&mut PanelState)) {
        f(&mut self.panel);
    }

    fn search_term(&mut self) -> String {
        self.panel.search_term.clone()
    }

    fn load_document(&mut self, document: Value) -> design_sync_core::Result<()> {
        if !document.is_object() {
            return Err(Error::InvalidDocument("expected a JSON object".to_string()));
        }
        self.document = Some(document);
        Ok(())
    }

    fn notify(&mut self, notice: Notice) {
        match notice.detail() {
            Some(detail) => eprintln!("{:?}: {}", notice, detail),
            None => eprintln!("{:?}", notice),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match Config::load() {
        Ok(config) => run(cli.command, &config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &Config) -> design_sync_core::Result<String> {
    let client = SyncClient::from_config(config);
    let mut host = ConsoleHost {
        panel: PanelState::new(&config.default_prompt),
        document: None,
    };

    match command {
        // Unlike the panel, a failed listing is an error here
        Commands::List { search: term } => {
            let projects = client.list().await?;
            Ok(serde_json::to_string_pretty(&json!({
                "search": term,
                "projects": filter_projects(&projects, &term),
            }))?)
        }
        Commands::Open { project, output } => {
            let projects = client.list().await?;
            let target = projects
                .iter()
                .find(|p| p.id == project || p.filename == project)
                .ok_or_else(|| Error::NotFound(format!("No synced project {}", project)))?;

            open_project(&client, &mut host, target).await?;
            let document = host.document.take().unwrap_or(Value::Null);
            write_or_render(&document, output)
        }
        Commands::Generate { prompt, output } => {
            let prompt = prompt.unwrap_or_else(|| host.panel.prompt.clone());
            let created = create_with_ai(&client, &client, &mut host, &prompt).await?;

            if let Some(path) = output {
                let document = host.document.take().unwrap_or(Value::Null);
                write_or_render(&document, Some(path))?;
            }
            Ok(serde_json::to_string_pretty(&json!({
                "created": created,
                "projects": host.panel.projects.len(),
            }))?)
        }
    }
}

fn write_or_render(document: &Value, output: Option<PathBuf>) -> design_sync_core::Result<String> {
    let rendered = serde_json::to_string_pretty(document)?;
    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            Ok(serde_json::to_string_pretty(&json!({ "written": path }))?)
        }
        None => Ok(rendered),
    }
}
