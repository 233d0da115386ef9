pub mod release_announcer;
