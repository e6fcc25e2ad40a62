use clap::Parser;
use speeddial::cli::{
    run_assign, run_clear, run_contact, run_contacts_add, run_contacts_list, run_dial, run_grid,
    run_import, run_list, run_list_manage, run_menu, run_pick, run_prune, run_remove,
    run_set_enabled, run_toggle, run_without_store, Cli, Commands, ContactsCommands,
};
use speeddial::config::Config;
use speeddial::db::Database;
use speeddial::logging::setup_logging;
use speeddial::photo::FilePhotoLoader;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::resolve(cli.db.as_deref())?;
    tracing::debug!(db = %config.db_path.display(), "using database");

    // Screens resume the loader while they render and stop it afterwards
    let mut photos = FilePhotoLoader::new(&config.photo_dir);

    let db = match Database::open_at(&config.db_path) {
        Ok(db) => db,
        Err(e) => return run_without_store(cli.command, &mut photos, e),
    };

    match cli.command {
        None => {
            // No subcommand provided - show interactive menu
            run_menu(&db, &mut photos)
        }
        Some(Commands::List(args)) => {
            if args.manage {
                run_list_manage(&db, &mut photos)
            } else {
                run_list(&db, &mut photos, args.json)
            }
        }
        Some(Commands::Grid(args)) => run_grid(&db, args.phone),
        Some(Commands::Pick(args)) => {
            run_pick(&db, &mut photos, args.key, args.search.as_deref())
        }
        Some(Commands::Contact(args)) => run_contact(&db, args.id, args.key, args.pick),
        Some(Commands::Assign(args)) => run_assign(&db, args.key, args.phone_id, args.force),
        Some(Commands::Remove(args)) => run_remove(&db, args.key),
        Some(Commands::Clear(args)) => run_clear(&db, args.force),
        Some(Commands::Enable) => run_set_enabled(&db, true),
        Some(Commands::Disable) => run_set_enabled(&db, false),
        Some(Commands::Toggle(args)) => run_toggle(&db, args.force),
        Some(Commands::Dial(args)) => run_dial(&db, args.key, args.print),
        Some(Commands::Contacts(args)) => match args.command {
            ContactsCommands::Add(add) => run_contacts_add(
                &db,
                &add.name,
                &add.phones,
                add.phone_type.as_deref(),
                add.photo_id,
            ),
            ContactsCommands::List => run_contacts_list(&db),
        },
        Some(Commands::Import(args)) => run_import(&db, &args.file, args.dry_run),
        Some(Commands::Prune) => run_prune(&db),
    }
}

