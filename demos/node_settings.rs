use getarg::derive::*;

#[derive(Debug, FromArgs)]
struct Settings {
    #[getarg(name = "datadir", default = "~/.node")]
    data_dir: String,
    #[getarg(default = 8333)]
    port: i64,
    #[getarg(default = true)]
    listen: bool,
    #[getarg(name = "maxconnections")]
    max_connections: Option<u16>,
}

fn main() {
    let settings = Settings::from_env_args();
    println!("{settings:?}");
}
