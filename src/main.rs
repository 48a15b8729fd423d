use clap::{Args, Parser, Subcommand};
use log::{debug, error};
use std::path::PathBuf;
use std::process::ExitCode;

use recipe_hub::{
    validate_recipe_with_limits, validate_registration, Catalog, FormValues, HubConfig, HubError,
    Recipe, RecipeDraft, SearchPlan, UserQuery, ValidationResult,
};

#[derive(Parser, Debug)]
#[command(name = "recipe-hub", version, about = "Browse, search and check recipes")]
struct Cli {
    /// Log filter, overrides the config file (RUST_LOG wins over both)
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Config file to read instead of ./recipe-hub.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Recipe JSON file to use instead of the bundled recipes
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every recipe
    List,
    /// Show recipes whose title or summary contains TERM
    Search { term: String },
    /// Show one recipe in full
    Show { id: u32 },
    /// Check an "add recipe" submission
    Validate(RecipeArgs),
    /// Check a sign-up submission
    Register(RegisterArgs),
    /// Show how a user search would be run
    Users(UserArgs),
}

#[derive(Args, Debug)]
struct RecipeArgs {
    #[arg(long, default_value = "")]
    title: String,
    #[arg(long, default_value = "")]
    summary: String,
    #[arg(long, default_value = "")]
    image: String,
    /// One ingredient per line
    #[arg(long, default_value = "")]
    ingredients: String,
    /// One step per line
    #[arg(long, default_value = "")]
    instructions: String,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    password: String,
}

#[derive(Args, Debug)]
struct UserArgs {
    #[arg(long, default_value = "")]
    username: String,
    #[arg(long, default_value = "")]
    location: String,
    #[arg(long, default_value = "")]
    min_repos: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    debug!("{:#?}", config);

    match run(cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<HubConfig, HubError> {
    let config = match &cli.config {
        Some(path) => HubConfig::load_from(path)?,
        None => HubConfig::load()?,
    };
    Ok(config)
}

fn load_catalog(cli: &Cli, config: &HubConfig) -> Result<Catalog, HubError> {
    match cli.data.as_ref().or(config.recipes_path.as_ref()) {
        Some(path) => Catalog::from_path(path),
        None => Catalog::bundled(),
    }
}

/// Execute one subcommand. `Ok(false)` means it ran but the exit status is a failure.
fn run(cli: Cli, config: &HubConfig) -> Result<bool, HubError> {
    match &cli.command {
        Commands::List => {
            let catalog = load_catalog(&cli, config)?;
            if catalog.is_empty() {
                println!("No recipes found. Check back soon!");
            }
            for recipe in catalog.all() {
                println!("{:>4}  {}", recipe.id, recipe.title);
            }
            Ok(true)
        }
        Commands::Search { term } => {
            let catalog = load_catalog(&cli, config)?;
            let hits = catalog.search(term);
            if hits.is_empty() {
                println!("No matching recipes found.");
            }
            for recipe in hits {
                println!("{:>4}  {}\n      {}", recipe.id, recipe.title, recipe.summary);
            }
            Ok(true)
        }
        Commands::Show { id } => {
            let catalog = load_catalog(&cli, config)?;
            match catalog.find(*id) {
                Ok(recipe) => {
                    print!("{}", format_recipe(recipe));
                    Ok(true)
                }
                Err(HubError::NotFound(_)) => {
                    eprintln!("Recipe not found");
                    Ok(false)
                }
                Err(e) => Err(e),
            }
        }
        Commands::Validate(args) => {
            let draft = RecipeDraft {
                title: args.title.clone(),
                summary: args.summary.clone(),
                image: args.image.clone(),
                ingredients: args.ingredients.clone(),
                instructions: args.instructions.clone(),
            };
            let result = validate_recipe_with_limits(&draft, &config.form)?;
            Ok(report(&result, "Recipe is valid"))
        }
        Commands::Register(args) => {
            let values = FormValues::new()
                .with("username", args.username.as_str())
                .with("email", args.email.as_str())
                .with("password", args.password.as_str());
            let result = validate_registration(&values, &config.form)?;
            Ok(report(&result, "Registration is valid"))
        }
        Commands::Users(args) => {
            let query = UserQuery::new(
                args.username.as_str(),
                args.location.as_str(),
                args.min_repos.as_str(),
            );
            let errors = query.validate()?;
            if !errors.is_empty() {
                return Ok(report(&errors, ""));
            }
            match query.plan() {
                SearchPlan::Empty => println!("Nothing to search for"),
                SearchPlan::Lookup(login) => println!("lookup: {}", login),
                SearchPlan::Advanced(q) => println!("search: {}", q),
            }
            Ok(true)
        }
    }
}

fn report(result: &ValidationResult, ok_message: &str) -> bool {
    if result.is_empty() {
        println!("{}", ok_message);
        return true;
    }
    for (field, message) in result.iter() {
        println!("{}: {}", field, message);
    }
    false
}

// Ingredients are a bulleted list, steps are numbered.
fn format_recipe(recipe: &Recipe) -> String {
    let mut out = format!("{}\n\n{}\n", recipe.title, recipe.summary);
    if !recipe.image.is_empty() {
        out.push_str(&format!("Image: {}\n", recipe.image));
    }

    out.push_str("\nIngredients\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {}\n", ingredient));
    }

    out.push_str("\nCooking Instructions\n");
    for (i, step) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step));
    }
    out
}
