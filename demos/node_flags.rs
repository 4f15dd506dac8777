use getarg::ArgumentTable;

fn main() {
    let table = ArgumentTable::builder()
        .tokens(std::env::args())
        .soft_set_bool_arg("-listen", true)
        .literal("-notify")
        .build();

    let data_dir = table.get_arg("-datadir", "~/.node");
    let port = table.get_int_arg("-port", 8333);
    let listen = table.get_bool_arg("-listen");
    let upnp = table.get_bool_arg_or("-upnp", true);

    println!("datadir: {data_dir}");
    println!("port: {port}");
    println!("listen: {listen}");
    println!("upnp: {upnp}");
}
