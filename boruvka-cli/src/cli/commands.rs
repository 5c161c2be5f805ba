//! Command implementations and argument parsing for the `boruvka` CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use boruvka_core::{BoruvkaBuilder, Graph, MinimumSpanningForest, MstError};
use boruvka_providers_edgelist::{
    EdgeListError, EdgeListProvider, GeneratorError, GraphGenerator, write_edge_list,
};
use clap::{Args, Parser, Subcommand};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_PARALLELISM: usize = 1;
const DEFAULT_CONNECTION_CHANCE: f64 = 1.0;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "boruvka", about = "Compute minimum spanning trees with Borůvka's algorithm.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of an edge list.
    Run(RunCommand),
    /// Write a random edge list.
    Generate(GenerateCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge list with one `source,destination,weight` line per edge.
    pub path: PathBuf,

    /// Number of search workers; 1 runs the sequential search. The worker
    /// pool is capped at the host's available parallelism.
    #[arg(long, default_value_t = DEFAULT_PARALLELISM)]
    pub parallelism: usize,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices, labelled `A`, `B`, ..., `AA`, ...
    pub vertices: usize,

    /// Destination file, overwritten if present.
    pub output: PathBuf,

    /// Probability that any given vertex pair is joined.
    #[arg(long, default_value_t = DEFAULT_CONNECTION_CHANCE)]
    pub connection_chance: f64,

    /// Seed for reproducible output; drawn at random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the edge list failed.
    #[error(transparent)]
    Load(#[from] EdgeListError),
    /// The MST computation failed.
    #[error(transparent)]
    Core(#[from] MstError),
    /// Generator parameters were rejected.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// Writing a generated edge list failed.
    #[error("failed to write `{}`: {source}", .path.display())]
    Write {
        /// Destination that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Outcome of the `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the loaded data source.
    pub data_source: String,
    /// Loaded graph; supplies vertex labels for rendering.
    pub graph: Graph,
    /// Computed minimum spanning forest.
    pub forest: MinimumSpanningForest,
}

/// Outcome of the `generate` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// File the edge list was written to.
    pub output: PathBuf,
    /// Number of edges written.
    pub edges: usize,
    /// Seed that reproduces the output.
    pub seed: u64,
}

/// Result of any CLI command.
#[derive(Debug, Clone)]
pub enum CommandOutcome {
    /// A minimum spanning forest was computed.
    Mst(ExecutionSummary),
    /// An edge list was generated.
    Generated(GenerationSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading, computing, or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use boruvka_cli::cli::{Cli, Command, CommandOutcome, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A,B,1\nB,C,2\nA,C,3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         parallelism: 2,
///         name: None,
///     }),
/// };
/// let CommandOutcome::Mst(summary) = run_cli(cli)? else {
///     unreachable!("run always computes an MST");
/// };
/// assert_eq!(summary.forest.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<CommandOutcome, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run).map(CommandOutcome::Mst)
        }
        Command::Generate(generate) => {
            span.record("command", field::display("generate"));
            generate_command(generate).map(CommandOutcome::Generated)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = field::Empty, parallelism = command.parallelism),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        parallelism,
        name,
    } = command;
    Span::current().record("path", field::display(path.display()));

    let boruvka = BoruvkaBuilder::new().with_parallelism(parallelism).build()?;
    let data_source = derive_data_source_name(&path, name.as_deref());
    let provider = EdgeListProvider::try_from_path(&data_source, &path)?;
    let forest = boruvka.run(provider.graph())?;

    info!(
        data_source = provider.name(),
        components = forest.component_count(),
        total_weight = forest.total_weight(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source,
        graph: provider.into_graph(),
        forest,
    })
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(output = field::Empty, vertices = command.vertices, seed = field::Empty),
)]
pub(super) fn generate_command(command: GenerateCommand) -> Result<GenerationSummary, CliError> {
    let GenerateCommand {
        vertices,
        output,
        connection_chance,
        seed,
    } = command;
    let generator = GraphGenerator::new(vertices, connection_chance)?;
    let seed = seed.unwrap_or_else(rand::random);
    let span = Span::current();
    span.record("output", field::display(output.display()));
    span.record("seed", seed);

    let records = generator.generate(&mut SmallRng::seed_from_u64(seed));
    let write_error = |source| CliError::Write {
        path: output.clone(),
        source,
    };
    let file = File::create(&output).map_err(write_error)?;
    write_edge_list(BufWriter::new(file), &records).map_err(write_error)?;

    info!(edges = records.len(), "edge list generated");
    Ok(GenerationSummary {
        output,
        edges: records.len(),
        seed,
    })
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "edge_list".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer`: a header block, one `component:` line of
/// vertex labels per tree, then one `source,destination,weight` line per tree
/// edge in ascending edge order.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use boruvka_cli::cli::{ExecutionSummary, render_summary};
/// # use boruvka_core::{Graph, compute_mst};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut builder = Graph::builder();
/// builder.add_edge("A", "B", 1.5)?;
/// let graph = builder.build();
/// let forest = compute_mst(&graph, 1)?;
/// let summary = ExecutionSummary { data_source: "demo".into(), graph, forest };
///
/// let mut out = Vec::new();
/// render_summary(&summary, &mut out)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.ends_with("total weight: 1.5\ncomponent: A,B\nA,B,1.5\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let ExecutionSummary {
        data_source,
        graph,
        forest,
    } = summary;
    writeln!(writer, "data source: {data_source}")?;
    writeln!(writer, "vertices: {}", graph.vertex_count())?;
    writeln!(writer, "edges: {}", graph.edge_count())?;
    writeln!(writer, "components: {}", forest.component_count())?;
    writeln!(writer, "rounds: {}", forest.rounds())?;
    writeln!(writer, "total weight: {}", forest.total_weight())?;
    for component in forest.components() {
        let labels: Vec<&str> = component
            .iter()
            .map(|&vertex| graph.label(vertex).unwrap_or("?"))
            .collect();
        writeln!(writer, "component: {}", labels.join(","))?;
    }
    for edge in forest.edges() {
        let source = graph.label(edge.source()).unwrap_or("?");
        let target = graph.label(edge.target()).unwrap_or("?");
        writeln!(writer, "{source},{target},{}", edge.weight())?;
    }
    Ok(())
}

/// Renders any command outcome to `writer`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_outcome(outcome: &CommandOutcome, mut writer: impl Write) -> io::Result<()> {
    match outcome {
        CommandOutcome::Mst(summary) => render_summary(summary, writer),
        CommandOutcome::Generated(generated) => writeln!(
            writer,
            "wrote {} edges to {} (seed {})",
            generated.edges,
            generated.output.display(),
            generated.seed,
        ),
    }
}
