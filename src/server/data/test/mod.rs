mod automod_settings;
mod command_log;
mod game_server_log;
mod mod_log;
mod ticket;
mod user_data;
