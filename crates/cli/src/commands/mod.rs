pub mod browse;
pub mod find;
pub mod neighbors;
pub mod show;
pub mod stats;
pub mod utils;

pub use browse::handle_browse;
pub use find::handle_find;
pub use neighbors::handle_neighbors;
pub use show::handle_show;
pub use stats::handle_stats;
pub use utils::Target;
