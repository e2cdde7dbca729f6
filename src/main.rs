use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use mensa::application::{
    init, AnnouncementService, AuthService, ConfigService, FavoritesService, MenuService,
    ReviewService,
};
use mensa::cli::{output, AnnounceAction, Cli, Commands, CrowdAction, FavAction, ReviewAction};
use mensa::domain::menu::parse_allergen_list;
use mensa::domain::{AnnouncementKind, CrowdLevel, DateRef, MenuCategory, QuickFeedback};
use mensa::error::MensaError;
use mensa::infrastructure::{Config, DataStore, MenuItemPatch, NewAnnouncement, NewStudent};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolve a date reference like "today" or "next monday"
fn resolve_date(input: &str) -> Result<NaiveDate, MensaError> {
    Ok(DateRef::parse(input)?.resolve(today()))
}

/// Parse a plain DD-MM-YYYY date argument
fn parse_plain_date(input: &str) -> Result<NaiveDate, MensaError> {
    NaiveDate::parse_from_str(input, "%d-%m-%Y")
        .map_err(|_| MensaError::Config(format!("Invalid date format: '{}'. Expected DD-MM-YYYY", input)))
}

fn run(cli: Cli) -> Result<(), MensaError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::Register {
            name,
            email,
            password,
            student_number,
            department,
        } => {
            let store = DataStore::discover()?;
            let account = AuthService::new(store).register(NewStudent {
                name,
                email,
                password,
                student_number,
                department,
            })?;
            println!("Registered {} <{}>", account.name, account.email);
            println!("Log in with: mensa login {} <password>", account.email);
            Ok(())
        }

        Commands::Login { email, password } => {
            let store = DataStore::discover()?;
            let account = AuthService::new(store).login(&email, &password)?;
            println!("Logged in as {} ({})", account.name, account.role);
            Ok(())
        }

        Commands::Logout => {
            let store = DataStore::discover()?;
            AuthService::new(store).logout()?;
            println!("Logged out");
            Ok(())
        }

        Commands::Whoami => {
            let store = DataStore::discover()?;
            match AuthService::new(store).current_user()? {
                Some(account) => print!("{}", output::format_account(&account)),
                None => println!("Not logged in"),
            }
            Ok(())
        }

        Commands::Menu {
            date,
            category,
            safe_only,
        } => {
            let store = DataStore::discover()?;
            let date = resolve_date(&date)?;
            let category = category
                .map(|c| c.parse::<MenuCategory>())
                .transpose()
                .map_err(MensaError::Config)?;

            let view = MenuService::new(store.clone()).day_view(date, category, safe_only)?;
            let config = Config::load(&store)?;
            print!("{}", output::format_day_view(&view, &config));
            Ok(())
        }

        Commands::EditMenu {
            date,
            item_id,
            name,
            description,
            price,
            calories,
            available,
            allergens,
        } => {
            let store = DataStore::discover()?;
            let date = resolve_date(&date)?;
            let allergens = allergens
                .map(|a| parse_allergen_list(&a))
                .transpose()
                .map_err(MensaError::Config)?;

            let patch = MenuItemPatch {
                name,
                description,
                price,
                calories,
                available,
                allergens,
            };
            let updated = MenuService::new(store).edit_item(date, item_id, patch)?;
            println!(
                "Updated item {} on {}: {}{}",
                updated.id,
                date.format("%d-%m-%Y"),
                updated.name,
                if updated.available { "" } else { " [unavailable]" }
            );
            Ok(())
        }

        Commands::Calendar { from, to, limit } => {
            let store = DataStore::discover()?;
            let from = from.as_deref().map(parse_plain_date).transpose()?;
            let to = to.as_deref().map(parse_plain_date).transpose()?;

            let dates = MenuService::new(store).dates(from, to, limit)?;
            print!("{}", output::format_date_list(&dates));
            Ok(())
        }

        Commands::Review { action } => run_review(action),
        Commands::Fav { action } => run_fav(action),
        Commands::Announce { action } => run_announce(action),
        Commands::Crowd { action } => run_crowd(action),

        Commands::Allergens { set, clear } => {
            let store = DataStore::discover()?;
            let service = AuthService::new(store);

            if clear {
                service.set_allergens(vec![])?;
                println!("Allergen profile cleared");
            } else if let Some(list) = set {
                let allergens = parse_allergen_list(&list).map_err(MensaError::Config)?;
                let account = service.set_allergens(allergens)?;
                print!("{}", output::format_account(&account));
            } else {
                let account = service
                    .current_user()?
                    .ok_or(MensaError::NotLoggedIn)?;
                print!("{}", output::format_account(&account));
            }
            Ok(())
        }

        Commands::Config { key, value, list } => {
            let store = DataStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("cafeteria = {}", config.cafeteria);
                println!("currency = {}", config.currency);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: mensa config [--list | <key> [<value>]]");
                println!("Valid keys: cafeteria, currency, created");
                Ok(())
            }
        }
    }
}

fn run_review(action: ReviewAction) -> Result<(), MensaError> {
    let store = DataStore::discover()?;
    let service = ReviewService::new(store);

    match action {
        ReviewAction::Add {
            item_id,
            rating,
            date,
            comment,
            tags,
        } => {
            let date = resolve_date(&date)?;
            let tags = tags
                .iter()
                .map(|t| t.parse::<QuickFeedback>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(MensaError::Config)?;

            let review = service.add(date, item_id, rating, comment, tags)?;
            println!(
                "Recorded review {} for {} ({}/5)",
                review.id, review.menu_item_name, review.rating
            );
            Ok(())
        }

        ReviewAction::List { item, date } => {
            let date = date.as_deref().map(resolve_date).transpose()?;
            let reviews = service.list(item, date)?;
            print!("{}", output::format_review_list(&reviews));
            Ok(())
        }

        ReviewAction::Respond {
            review_id,
            response,
        } => {
            let updated = service.respond(review_id, &response)?;
            println!("Response recorded for review {}", updated.id);
            Ok(())
        }

        ReviewAction::Delete { review_id } => {
            service.delete(review_id)?;
            println!("Deleted review {}", review_id);
            Ok(())
        }
    }
}

fn run_fav(action: FavAction) -> Result<(), MensaError> {
    let store = DataStore::discover()?;
    let service = FavoritesService::new(store);

    match action {
        FavAction::Toggle { item_id, date } => {
            let date = resolve_date(&date)?;
            let (name, now_favorite) = service.toggle(date, item_id)?;
            if now_favorite {
                println!("Added {} to favorites", name);
            } else {
                println!("Removed {} from favorites", name);
            }
            Ok(())
        }

        FavAction::Remove { item_id } => {
            if service.remove(item_id)? {
                println!("Removed favorite {}", item_id);
            } else {
                println!("Item {} was not a favorite", item_id);
            }
            Ok(())
        }

        FavAction::List => {
            let favorites = service.list()?;
            print!("{}", output::format_favorite_list(&favorites));
            Ok(())
        }
    }
}

fn run_announce(action: Option<AnnounceAction>) -> Result<(), MensaError> {
    let store = DataStore::discover()?;
    let service = AnnouncementService::new(store);

    match action.unwrap_or(AnnounceAction::List { all: false }) {
        AnnounceAction::Add {
            title,
            message,
            kind,
            starts,
            ends,
            important,
        } => {
            let kind = kind
                .parse::<AnnouncementKind>()
                .map_err(MensaError::Config)?;
            let starts_on = match starts {
                Some(s) => parse_plain_date(&s)?,
                None => today(),
            };
            let ends_on = match ends {
                Some(e) => parse_plain_date(&e)?,
                None => starts_on + Duration::days(1),
            };

            let posted = service.post(NewAnnouncement {
                title,
                message,
                kind,
                starts_on,
                ends_on,
                important,
            })?;
            println!("Posted announcement {}: {}", posted.id, posted.title);
            Ok(())
        }

        AnnounceAction::Remove { id } => {
            service.remove(id)?;
            println!("Removed announcement {}", id);
            Ok(())
        }

        AnnounceAction::List { all } => {
            let announcements = service.list(all)?;
            print!("{}", output::format_announcement_list(&announcements));
            Ok(())
        }
    }
}

fn run_crowd(action: Option<CrowdAction>) -> Result<(), MensaError> {
    let store = DataStore::discover()?;
    let service = AnnouncementService::new(store);

    match action {
        Some(CrowdAction::Set { level, message }) => {
            let level = level.parse::<CrowdLevel>().map_err(MensaError::Config)?;
            let status = service.set_crowd_status(level, &message)?;
            print!("{}", output::format_crowd_status(&status));
            Ok(())
        }
        None => {
            let status = service.crowd_status()?;
            print!("{}", output::format_crowd_status(&status));
            Ok(())
        }
    }
}
