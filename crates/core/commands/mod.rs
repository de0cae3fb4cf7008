use crate::{app, interact};

use shelf::{storage::Storage, BookId, Session};

use clap::Subcommand;
use log::{trace, warn};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search the catalog and save the first book found
    #[clap(arg_required_else_help = true)]
    Search {
        /// The text to search for
        #[clap(required = true)]
        query: Vec<String>,
    },

    /// Show every saved book
    List,

    /// Show the most recently saved book
    Show,

    /// Remove a saved book using its id
    #[clap(arg_required_else_help = true)]
    Rm {
        /// The id of the book to remove
        id: BookId,
    },

    /// Replace a saved book by searching for its title again
    ///
    /// The saved book is removed straight away and the search creates a new book with a new id,
    /// which may not be the same book if the catalog finds something else first.
    #[clap(arg_required_else_help = true)]
    Edit {
        /// The id of the book to edit
        id: BookId,

        /// Search with the saved title without asking for changes first
        #[clap(short, long)]
        yes: bool,
    },
}

impl Commands {
    pub fn execute<S: Storage>(self, session: &mut Session<S>) -> eyre::Result<String> {
        match self {
            Commands::Search { query } => {
                let query = query.join(" ");
                search(session, &query)
            }
            Commands::List => Ok(app::render_table(session.store().books())),
            Commands::Show => Ok(session.detail().map_or_else(
                || "No hay libros guardados".to_owned(),
                app::render_record,
            )),
            Commands::Rm { id } => {
                trace!("Checking saved books for the id '{id}'..");
                let found = session.store().find_by_id(id).is_some();
                session.delete(id);
                if found {
                    Ok("Libro eliminado de la lista".to_owned())
                } else {
                    Ok(format!("No se encontró ningún libro con el id '{id}'"))
                }
            }
            Commands::Edit { id, yes } => {
                let title = match session.edit(id) {
                    Some(title) => title.to_owned(),
                    None => return Ok(format!("No se encontró ningún libro con el id '{id}'")),
                };

                let query = if yes {
                    title
                } else {
                    interact::user_edit_query(&title).map_err(|e| {
                        warn!("'{title}' was removed but not searched again");
                        e
                    })?
                };

                search(session, &query)
            }
        }
    }
}

fn search<S: Storage>(session: &mut Session<S>, query: &str) -> eyre::Result<String> {
    let book = app::render_record(session.search(query)?);
    Ok(format!(
        "{book}\n\n{}",
        app::render_table(session.store().books())
    ))
}
