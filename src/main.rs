use clap::Parser;
use colored::Colorize;
use lending_model::{
    CatalogedItem, Item, Lendable, LendingTracker, ReportError, StateVisualization,
    observers::{NotificationService, TransitionLogger},
};
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the lending demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log every transition at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print JSON snapshots of each item
    #[arg(long)]
    json: bool,

    /// Print the availability state machine as a DOT graph
    #[arg(long)]
    dot: bool,
}

/// Install the fmt subscriber, letting `RUST_LOG` override the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        error!("{e}");
    }
}

/// Run the demonstration scenarios
fn run(args: &Args) -> Result<(), ReportError> {
    println!("{}", "Lending Demonstration".green().bold());
    println!("=====================\n");

    let mut book = LendingTracker::new(
        Item::new("Harry Potter and the Philosopher's Stone", "J.K. Rowling").with_price(20),
    );
    book.register_observer(Box::new(TransitionLogger));
    book.register_observer(Box::new(NotificationService));

    if book.checkout() {
        println!("Book successfully lent.");
    } else {
        println!("Book is not currently available. Try in some time.");
    }
    book.checkin();
    println!("New book created. {}\n", book.item());

    if args.verbose {
        book.print_history();
        println!("{}", StateVisualization::history_table(&book.get_history()));
    }
    if args.json {
        println!("{}", StateVisualization::to_json(book.item())?);
    }

    let little_prince = Item::new("The Little Prince", "Antoine de Saint-Exupéry");
    println!("New book created. {little_prince}\n");

    let library_book = CatalogedItem::new(
        "Harry Potter and the Philosopher's Stone",
        "J.K. Rowling",
        "Children's Library, Oak Street",
    );
    println!("New book created. {library_book}");

    if args.json {
        println!("{}", StateVisualization::to_json(&library_book)?);
    }
    if args.dot {
        println!("\n{}", StateVisualization::generate_dot(library_book.availability()));
    }

    println!("\n{}", "Demonstration complete!".green().bold());
    Ok(())
}
