use clap::{Parser, Subcommand};
use log::debug;

use recipe_book::{AppConfig, Recipe, RecipeBook, RecipeDraft, SearchResultItem};

/// Look up, scale, bookmark and upload recipes
#[derive(Parser, Debug)]
#[command(name = "recipe-book")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search recipes and print one page of results
    Search {
        query: String,
        /// Page of results to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Show a recipe, optionally scaled to another serving count
    Show {
        id: String,
        #[arg(short, long)]
        servings: Option<u32>,
    },
    /// Bookmark a recipe
    Bookmark { id: String },
    /// Remove a bookmark
    Unbookmark { id: String },
    /// List bookmarked recipes
    Bookmarks,
    /// Upload a recipe from name=value fields (ingredient fields: "quantity, unit, description")
    Upload {
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

fn print_results(results: &[SearchResultItem]) {
    for item in results {
        println!("{}  {} ({})", item.id, item.title, item.publisher);
    }
}

fn print_recipe(recipe: &Recipe) {
    let marker = if recipe.bookmarked { " [bookmarked]" } else { "" };
    println!("{}{}", recipe.title, marker);
    println!("by {} - {}", recipe.publisher, recipe.source_url);
    println!(
        "{} servings, {} minutes",
        recipe.servings, recipe.cooking_time
    );
    for ingredient in &recipe.ingredients {
        match ingredient.quantity {
            Some(quantity) => println!(
                "  {} {} {}",
                quantity, ingredient.unit, ingredient.description
            ),
            None => println!("  {} {}", ingredient.unit, ingredient.description),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = AppConfig::load()?;
    debug!("{:?}", config);

    let mut book = RecipeBook::from_config(&config)?;

    match args.command {
        Command::Search { query, page } => {
            book.load_search_results(&query).await?;
            let results = book.set_page_and_get_results(page).to_vec();
            if results.is_empty() {
                println!("No recipe found for your query! Please try again ;)");
            }
            print_results(&results);
            let search = &book.state().search;
            println!("-- page {} of {}", search.page, search.page_count());
        }
        Command::Show { id, servings } => {
            book.load_recipe(&id).await?;
            if let Some(servings) = servings {
                book.update_servings(servings)?;
            }
            if let Some(recipe) = &book.state().recipe {
                print_recipe(recipe);
            }
        }
        Command::Bookmark { id } => {
            book.load_recipe(&id).await?;
            book.add_current_bookmark()?;
            println!("Bookmarked {}", id);
        }
        Command::Unbookmark { id } => {
            book.delete_bookmark(&id)?;
            println!("Removed bookmark {}", id);
        }
        Command::Bookmarks => {
            for bookmark in &book.state().bookmarks {
                println!("{}  {} ({})", bookmark.id, bookmark.title, bookmark.publisher);
            }
        }
        Command::Upload { fields } => {
            let draft: RecipeDraft = fields.into_iter().collect();
            book.upload_recipe(&draft).await?;
            if let Some(recipe) = &book.state().recipe {
                print_recipe(recipe);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("ingredient-1=0.5, kg, Rice").unwrap(),
            ("ingredient-1".to_string(), "0.5, kg, Rice".to_string())
        );
        assert_eq!(
            parse_field("title=a=b").unwrap(),
            ("title".to_string(), "a=b".to_string())
        );
        assert!(parse_field("no-separator").is_err());
    }

    #[test]
    fn test_cli_parses_upload_fields() {
        let args = Args::try_parse_from([
            "recipe-book",
            "upload",
            "--field",
            "title=Soup",
            "-f",
            "servings=2",
        ])
        .unwrap();

        match args.command {
            Command::Upload { fields } => assert_eq!(fields.len(), 2),
            other => panic!("Expected upload, got {:?}", other),
        }
    }
}
