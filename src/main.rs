use maven_depgraph::adapters::outbound::console::StderrProgressReporter;
use maven_depgraph::adapters::outbound::filesystem::{
    FileSystemWriter, FixtureRepository, StdoutPresenter,
};
use maven_depgraph::adapters::outbound::formatters::{render_reverse_report, DotFormatter};
use maven_depgraph::adapters::outbound::network::MavenRepository;
use maven_depgraph::adapters::outbound::renderer::{image_format_for, GraphvizRenderer};
use maven_depgraph::application::dto::{GraphResponse, OutputFormat, ReverseLookup};
use maven_depgraph::application::factories::FormatterFactory;
use maven_depgraph::application::use_cases::AnalyzeDependenciesUseCase;
use maven_depgraph::cli::{Args, Settings};
use maven_depgraph::config::{discover_config, load_config_from_path};
use maven_depgraph::ports::outbound::{
    DependencyResolver, GraphFormatter, GraphRenderer, OutputPresenter, ProgressReporter,
};
use maven_depgraph::shared::error::ExitCode;
use maven_depgraph::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();

    let settings = match load_settings(args) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e, ExitCode::InvalidArguments),
    };

    if let Err(e) = run(&settings) {
        exit_with(&e, ExitCode::ApplicationError);
    }
}

fn exit_with(error: &anyhow::Error, code: ExitCode) -> ! {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", error);

    // Display error chain
    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }

    eprintln!();
    process::exit(code.as_i32());
}

fn load_settings(args: Args) -> Result<Settings> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };
    Settings::from_args(args, config)
}

fn run(settings: &Settings) -> Result<()> {
    let progress_reporter = StderrProgressReporter::new();
    let resolver = create_resolver(settings, &progress_reporter)?;

    let use_case = AnalyzeDependenciesUseCase::new(resolver, progress_reporter);
    let response = use_case.execute(settings.to_request())?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.graph)?;
    StdoutPresenter::new().present(&formatted_output)?;

    present_reverse_lookups(&response, settings.format);

    if let Some(output_path) = settings.output.as_deref() {
        write_graph_file(&response, output_path)?;
    }

    Ok(())
}

fn create_resolver(
    settings: &Settings,
    progress_reporter: &StderrProgressReporter,
) -> Result<Box<dyn DependencyResolver>> {
    if settings.test_mode {
        let repository = FixtureRepository::from_path(Path::new(&settings.repository))?;
        for line in repository.malformed_lines() {
            progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipping malformed line {} in {}: {}",
                line.line_number, settings.repository, line.content
            ));
        }
        progress_reporter.report(&format!(
            "📂 Loaded {} package(s) from test repository {}",
            repository.package_count(),
            settings.repository
        ));
        Ok(Box::new(repository))
    } else {
        Ok(Box::new(MavenRepository::new(&settings.repository)?))
    }
}

/// Tree output gets the reports on stdout; DOT and JSON keep stdout parseable
fn present_reverse_lookups(response: &GraphResponse, format: OutputFormat) {
    for lookup in &response.reverse_lookups {
        match lookup {
            ReverseLookup::Found { query, dependents } => {
                let report = render_reverse_report(query, dependents);
                if format == OutputFormat::Tree {
                    println!("\n{}", report);
                } else {
                    eprintln!("\n{}", report);
                }
            }
            ReverseLookup::NotFound { query, reason } => {
                eprintln!("\n⚠️  Warning: Reverse lookup for {} failed: {}", query, reason);
            }
        }
    }
}

fn write_graph_file(response: &GraphResponse, output_path: &Path) -> Result<()> {
    let dot_source = DotFormatter::new().format(&response.graph)?;

    if image_format_for(output_path).is_some() {
        GraphvizRenderer::new().render(&dot_source, output_path)
    } else {
        FileSystemWriter::new(output_path.to_path_buf()).present(&dot_source)
    }
}
