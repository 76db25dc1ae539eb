use anyhow::{Context, Result};
use clap::Parser;
use nestview_core::{EdgeStyle, SessionConfig, VertexId};
use nestview_events::{Event, EventBus};
use nestview_graph::Session;
use tracing_subscriber::EnvFilter;

mod demo;

use demo::Demo;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in program to load
    #[arg(long, value_enum, default_value_t = Demo::Small)]
    demo: Demo,

    /// Session config as JSON; flags below override it
    #[arg(long)]
    config_json: Option<String>,

    /// Gap between a container border and its children
    #[arg(long)]
    margin_padding: Option<f32>,

    /// Gap between sibling vertices
    #[arg(long)]
    nodes_padding: Option<f32>,

    /// Route edges as curves instead of straight lines
    #[arg(long)]
    curved: bool,

    /// Collapse every container before applying toggles
    #[arg(long)]
    collapse_all: bool,

    /// Toggle a container by id (repeatable, applied in order)
    #[arg(short, long)]
    toggle: Vec<i64>,

    /// Show only these vertices and their ancestors (repeatable)
    #[arg(long)]
    keep: Vec<i64>,

    /// Highlight vertices matching this text
    #[arg(short, long)]
    search: Option<String>,

    /// Print compact JSON
    #[arg(long)]
    compact: bool,
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config_json {
            Some(json) => SessionConfig::from_json(json).context("parsing --config-json")?,
            None => SessionConfig::default(),
        };
        if let Some(margin) = self.margin_padding {
            config.layout.margin_padding = margin;
        }
        if let Some(padding) = self.nodes_padding {
            config.layout.nodes_padding = padding;
        }
        if self.curved {
            config.router.style = EdgeStyle::Curved;
        }
        config.validate()?;
        Ok(config)
    }

    fn commands(&self) -> Vec<Event> {
        let mut commands = Vec::new();
        if self.collapse_all {
            commands.push(Event::CollapseAll);
        }
        commands.extend(self.toggle.iter().map(|&id| Event::Toggle { id: VertexId(id) }));
        if !self.keep.is_empty() {
            commands.push(Event::HideExcept {
                keep: self.keep.iter().copied().map(VertexId).collect(),
            });
        }
        if let Some(query) = &self.search {
            commands.push(Event::Search {
                query: query.clone(),
            });
        }
        commands
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let config = args.session_config()?;

    let (mut session, report) = Session::from_events(config, args.demo.events());
    tracing::info!(
        "Loaded {:?} demo: {} vertices, {} edges, {} rejected events",
        args.demo,
        report.vertices_added,
        report.edges_added,
        report.errors.len()
    );

    let bus = EventBus::new();
    for command in args.commands() {
        bus.publish(command);
    }
    let receiver = bus.receiver();
    while let Ok(command) = receiver.try_recv() {
        session
            .handle_command(&command)
            .with_context(|| format!("applying {:?}", command))?;
    }

    let snapshot = session.snapshot();
    let json = if args.compact {
        serde_json::to_string(&snapshot)?
    } else {
        serde_json::to_string_pretty(&snapshot)?
    };
    println!("{}", json);
    Ok(())
}
