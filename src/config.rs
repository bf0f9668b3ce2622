use clap::Parser;

/// Languages queried on every source, in output order.
pub const POPULAR_LANGUAGES: [&str; 9] = [
    "Python",
    "Java",
    "JavaScript",
    "C",
    "C#",
    "C++",
    "Go",
    "Ruby",
    "1c",
];

pub const HH_TITLE: &str = "HeadHunter Moscow";
pub const SJ_TITLE: &str = "SuperJob Moscow";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "salary-stats",
    about = "Programming language salary statistics from HeadHunter and SuperJob"
)]
pub struct Config {
    /// SuperJob API application key
    #[arg(long, env = "SUPER_JOB_API_KEY", hide_env_values = true)]
    pub superjob_api_key: String,

    /// HeadHunter vacancy search endpoint
    #[arg(long, env = "HH_API_URL", default_value = "https://api.hh.ru/vacancies/")]
    pub hh_api_url: String,

    /// SuperJob vacancy search endpoint
    #[arg(
        long,
        env = "SJ_API_URL",
        default_value = "https://api.superjob.ru/2.0/vacancies/"
    )]
    pub sj_api_url: String,
}
