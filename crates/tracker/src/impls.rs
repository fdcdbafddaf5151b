mod github;

pub use self::github::GithubTracker;
