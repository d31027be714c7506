mod asset;
mod health;
mod not_found;
