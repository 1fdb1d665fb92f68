pub mod destripe;
pub mod logger;
