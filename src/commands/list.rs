//! List command implementation

use crate::{
    cli::ListKind,
    mineplex::{Board, EndpointCatalog, Game, Platform},
};

/// Lines printed for a list request.
pub fn list_lines(what: ListKind, catalog: &EndpointCatalog) -> Vec<String> {
    match what {
        ListKind::Games => Game::ALL.iter().map(|g| g.to_string()).collect(),
        ListKind::Boards => Board::ALL.iter().map(|b| b.to_string()).collect(),
        ListKind::Platforms => Platform::ALL
            .iter()
            .map(|p| format!("{} ({})", p, p.base_path()))
            .collect(),
        ListKind::Endpoints => catalog
            .iter()
            .map(|d| format!("{} {} {}", d.kind, d.method, d.template))
            .collect(),
    }
}

/// Handle the list command
pub fn handle_list(what: ListKind, catalog: &EndpointCatalog) {
    for line in list_lines(what, catalog) {
        println!("{}", line);
    }
}
