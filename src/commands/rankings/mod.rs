mod load;
mod regional_ranking;
mod report;
mod run;
mod top_ranking;

pub use run::run;

use load::*;
use regional_ranking::*;
use report::*;
use top_ranking::*;
