//! CLI entrypoint.

use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use appledoc::frameworks::{all_frameworks, frameworks_by_category, search_frameworks};
use appledoc::{
	AnalysisOptions, DocFetcher, FrameworkCategory, Settings, WwdcDataSource, framework_info,
	logging,
};
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use serde_json::Value;

#[derive(Args, Clone)]
struct FetchArgs {
	/// Documentation page or JSON API URL on developer.apple.com
	url: String,

	/// Append related APIs from relationship and see-also sections
	#[arg(long, default_value_t = false)]
	related_apis: bool,

	/// Append a listing of the page's references
	#[arg(long, default_value_t = false)]
	references: bool,

	/// Append APIs grouped by topic section
	#[arg(long, default_value_t = false)]
	similar_apis: bool,

	/// Append a platform compatibility summary
	#[arg(long, default_value_t = false)]
	platform_analysis: bool,

	/// Enable every analysis section
	#[arg(short = 'a', long, default_value_t = false)]
	all: bool,

	/// How many wrapper pages to follow before rendering
	#[arg(short = 'd', long)]
	max_depth: Option<u32>,

	/// Print the JSON response envelope instead of the rendered text
	#[arg(long, default_value_t = false)]
	json: bool,
}

impl FetchArgs {
	fn options(&self) -> AnalysisOptions {
		if self.all {
			return AnalysisOptions::all();
		}
		AnalysisOptions::from_flags(
			self.related_apis,
			self.references,
			self.similar_apis,
			self.platform_analysis,
		)
	}
}

#[derive(Args, Clone)]
struct FrameworkArgs {
	/// Framework name in any common spelling
	name: String,

	/// Print the result as JSON
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args, Clone)]
struct FrameworksArgs {
	/// Only list frameworks whose name or alias contains this text
	#[arg(short = 's', long)]
	search: Option<String>,

	/// Only list frameworks in this category (UI, Graphics, Games, Media, Data, ML, Services, System, Foundation)
	#[arg(short = 'c', long)]
	category: Option<FrameworkCategory>,
}

#[derive(Args, Clone)]
struct WwdcArgs {
	/// Directory holding the bundled WWDC data
	#[arg(long, value_name = "DIR")]
	data_dir: Option<PathBuf>,

	#[command(subcommand)]
	command: WwdcCommand,
}

#[derive(Subcommand, Clone)]
enum WwdcCommand {
	/// Print the global metadata index.
	Metadata,
	/// Print the years covered by the data set.
	Years,
	/// Print the index for one year.
	Year {
		/// Four-digit year
		year: String,
	},
	/// Print the index for one topic.
	Topic {
		/// Topic identifier
		id: String,
	},
	/// Print a single session.
	Video {
		/// Four-digit year
		year: String,
		/// Numeric session identifier
		id: String,
	},
	/// Print every session.
	Videos,
}

#[derive(Subcommand, Clone)]
enum Command {
	/// Fetch a documentation page and print it as markdown.
	Fetch(FetchArgs),
	/// Show the canonical name, aliases and category of a framework.
	Framework(FrameworkArgs),
	/// List known frameworks.
	Frameworks(FrameworksArgs),
	/// Query the bundled WWDC session data.
	Wwdc(WwdcArgs),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the appledoc CLI.
struct Cli {
	/// Enable debug logging on stderr
	#[arg(short = 'v', long, global = true, default_value_t = false)]
	verbose: bool,

	/// Disable ANSI colors in CLI output
	#[arg(long, global = true, default_value_t = false)]
	no_color: bool,

	#[command(subcommand)]
	command: Command,
}

fn should_color_output(no_color: bool) -> bool {
	if no_color {
		return false;
	}
	if std::env::var_os("NO_COLOR").is_some() {
		return false;
	}
	if std::env::var("TERM").ok().as_deref() == Some("dumb") {
		return false;
	}
	std::io::stderr().is_terminal()
}

fn report(message: &str, color: bool) {
	if color {
		eprintln!("{}", message.red());
	} else {
		eprintln!("{message}");
	}
}

fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbose);
	let color = should_color_output(cli.no_color);

	match run(cli, color) {
		Ok(true) => {}
		Ok(false) => process::exit(1),
		Err(e) => {
			report(&e.to_string(), color);
			process::exit(1);
		}
	}
}

/// Returns `Ok(false)` when the command completed but reported a failure of its own.
fn run(cli: Cli, color: bool) -> Result<bool, Box<dyn Error>> {
	match cli.command {
		Command::Fetch(args) => run_fetch(&args, color),
		Command::Framework(args) => run_framework(&args).map(|()| true),
		Command::Frameworks(args) => {
			run_frameworks(&args);
			Ok(true)
		}
		Command::Wwdc(args) => run_wwdc(&args).map(|()| true),
	}
}

fn run_fetch(args: &FetchArgs, color: bool) -> Result<bool, Box<dyn Error>> {
	let settings = Settings::from_env();
	let fetcher = DocFetcher::from_settings(&settings);
	let max_depth = args.max_depth.unwrap_or(settings.max_depth);

	let response = fetcher.fetch_document(&args.url, args.options(), max_depth);
	if args.json {
		println!("{}", serde_json::to_string_pretty(&response)?);
	} else if response.is_error() {
		report(response.first_text(), color);
	} else {
		println!("{}", response.first_text());
	}
	Ok(!response.is_error())
}

fn run_framework(args: &FrameworkArgs) -> Result<(), Box<dyn Error>> {
	let info = framework_info(&args.name);
	if args.json {
		println!("{}", serde_json::to_string_pretty(&info)?);
		return Ok(());
	}

	println!("Canonical: {}", info.canonical);
	if info.aliases.is_empty() {
		println!("Aliases: (none)");
	} else {
		println!("Aliases: {}", info.aliases.join(", "));
	}
	match info.category {
		Some(category) => println!("Category: {category}"),
		None => println!("Category: (uncategorized)"),
	}
	println!("Valid: {}", if info.is_valid { "yes" } else { "no" });
	Ok(())
}

fn run_frameworks(args: &FrameworksArgs) {
	let mut names = match args.search.as_deref() {
		Some(query) => search_frameworks(query),
		None => all_frameworks(),
	};
	if let Some(category) = args.category {
		let listed = frameworks_by_category(category);
		match args.search {
			Some(_) => names.retain(|name| listed.contains(name)),
			None => names = listed,
		}
	}
	for name in names {
		println!("{name}");
	}
}

fn run_wwdc(args: &WwdcArgs) -> Result<(), Box<dyn Error>> {
	let mut settings = Settings::from_env();
	if let Some(dir) = &args.data_dir {
		settings = settings.with_data_dir(dir.clone());
	}
	let source = WwdcDataSource::from_settings(&settings)?;

	let value: Value = match &args.command {
		WwdcCommand::Metadata => source.load_global_metadata()?,
		WwdcCommand::Years => {
			let metadata: Value = source.load_global_metadata()?;
			metadata
				.get("years")
				.cloned()
				.ok_or("WWDC metadata does not list any years")?
		}
		WwdcCommand::Year { year } => source.load_year_index(year)?,
		WwdcCommand::Topic { id } => source.load_topic_index(id)?,
		WwdcCommand::Video { year, id } => source.load_video(year, id)?,
		WwdcCommand::Videos => source.load_all_videos()?,
	};
	println!("{}", serde_json::to_string_pretty(&value)?);
	Ok(())
}
