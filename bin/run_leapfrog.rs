use clap::Parser;
use leapfrog_opt::{
    LeapfrogConfigBuilder, OptimizationRecorder, ParallelConfig,
    function_registry::{FunctionMetadata, FunctionRegistry},
    minimize, run_recorded_minimize,
};
use std::fmt::Write as FmtWrite;
use std::process;
use std::sync::Arc;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "run_leapfrog",
    about = "Run the leapfrogging optimizer on a selected benchmark function"
)]
struct Cli {
    /// Name of the benchmark function to optimize (use --list-functions to see available options)
    #[arg(long)]
    function: Option<String>,

    /// Dimensionality of the problem (defaults to the function's recommended dimension)
    #[arg(long)]
    dim: Option<usize>,

    /// Point set (population) size
    #[arg(long, default_value_t = 20)]
    points: usize,

    /// Maximum number of iterations for the optimizer
    #[arg(long, default_value_t = 10000)]
    maxit: usize,

    /// Convergence tolerance
    #[arg(long, default_value_t = 1e-5)]
    tol: f64,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated indices of variables constrained to integer values
    #[arg(long, value_delimiter = ',')]
    discrete: Vec<usize>,

    /// Print intermediate progress lines while running
    #[arg(long)]
    disp: bool,

    /// Print progress every N iterations through the callback (>= 1)
    #[arg(long, default_value_t = 100)]
    progress_every: usize,

    /// Enable parallel evaluation of the initial point set
    #[arg(long)]
    parallel: bool,

    /// Number of threads for parallel evaluation (0 = use all available cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Record every objective evaluation and write a CSV trace on exit
    #[arg(long)]
    record: bool,

    /// Output directory for the recorded CSV trace
    #[arg(long, default_value = "data_generated")]
    record_dir: String,

    /// List all available functions and exit
    #[arg(long)]
    list_functions: bool,

    /// Show metadata for the selected function before running optimization
    #[arg(long)]
    show_metadata: bool,
}

fn main() {
    let args = Cli::parse();

    let registry = FunctionRegistry::new();

    if args.list_functions {
        list_available_functions(&registry);
        return;
    }

    let function_name = match &args.function {
        Some(name) => name.trim().to_lowercase(),
        None => {
            eprintln!("Error: --function must be provided unless --list-functions is used.");
            process::exit(2);
        }
    };

    let (function, metadata) = match registry.get(&function_name) {
        Some((f, meta)) => (*f, meta.clone()),
        None => {
            eprintln!(
                "Error: function '{function_name}' not found. Use --list-functions to inspect available names."
            );
            process::exit(2);
        }
    };

    if args.show_metadata {
        print_metadata(&metadata);
    }

    let dimension = args.dim.unwrap_or(metadata.default_dim);
    if dimension == 0 {
        eprintln!("Error: problem dimension must be greater than zero.");
        process::exit(2);
    }

    if args.progress_every == 0 {
        eprintln!("Error: --progress-every must be at least 1.");
        process::exit(2);
    }

    let bounds = vec![metadata.bounds; dimension];

    let parallel = ParallelConfig {
        enabled: args.parallel,
        num_threads: if args.threads == 0 {
            None
        } else {
            Some(args.threads)
        },
    };

    let mut builder = LeapfrogConfigBuilder::new()
        .points(args.points)
        .maxit(args.maxit)
        .tol(args.tol)
        .disp(args.disp)
        .parallel(parallel);

    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if !args.discrete.is_empty() {
        builder = builder.discrete(args.discrete.clone());
    }

    let progress_every = args.progress_every;
    let mut best_so_far = f64::INFINITY;
    builder = builder.callback(Box::new(move |intermediate| {
        if intermediate.fun < best_so_far {
            best_so_far = intermediate.fun;
        }
        if intermediate.iter == 1 || intermediate.iter % progress_every == 0 {
            println!(
                "iter {:>6} | f(x) = {:>12.6e} | error = {:>10.3e} | best = {:>12.6e}",
                intermediate.iter, intermediate.fun, intermediate.error, best_so_far
            );
        }
    }));

    let config = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: invalid configuration: {}", e);
            process::exit(2);
        }
    };

    println!(
        "Running leapfrog on '{}' ({}D) with {} points, maxit={}, tol={:.1e}",
        metadata.name, dimension, args.points, args.maxit, args.tol
    );

    let overall_start = Instant::now();

    let (report, recorder) = if args.record {
        let recorder = Arc::new(OptimizationRecorder::with_output_dir(
            function_name.clone(),
            args.record_dir.clone(),
        ));
        let result = run_recorded_minimize(function, &bounds, config, recorder.clone());
        (result, Some(recorder))
    } else {
        (minimize(&function, &bounds, config), None)
    };

    let report = match report {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: optimization failed: {}", e);
            process::exit(2);
        }
    };

    let elapsed = overall_start.elapsed();
    println!("\nOptimization completed in {:.2?}", elapsed);
    println!("Status: {}", report.message);
    println!(
        "Iterations: {} | Evaluations: {} | Success: {}",
        report.nit, report.nfev, report.success
    );
    println!(
        "Best objective: {:.6e} (known global minimum: {:.6e})",
        report.fun, metadata.global_minimum
    );
    if report.maxcv > 0.0 {
        println!("Largest constraint violation seen: {:.3e}", report.maxcv);
    }

    let mut best_vector = String::new();
    for (idx, value) in report.x.iter().enumerate() {
        if idx > 0 {
            best_vector.push_str(", ");
        }
        let _ = write!(&mut best_vector, "{value:.6}");
    }
    println!("Best parameters: [{}]", best_vector);

    if let Some(recorder) = recorder {
        match recorder.finalize() {
            Ok(path) => println!("Evaluation trace written to {}", path),
            Err(e) => eprintln!("Warning: could not write evaluation trace: {}", e),
        }
    }

    if !report.success {
        process::exit(1);
    }
}

fn list_available_functions(registry: &FunctionRegistry) {
    let names = registry.names();
    println!("Available test functions ({}):", names.len());
    for name in names {
        println!("- {name}");
    }
}

fn print_metadata(meta: &FunctionMetadata) {
    println!("Function metadata:");
    println!("  Name: {}", meta.name);
    println!("  Bounds per variable: [{}, {}]", meta.bounds.0, meta.bounds.1);
    println!("  Recommended dimension: {}", meta.default_dim);
    println!("  Global minimum value: {}", meta.global_minimum);
}
