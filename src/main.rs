fn main() {
    ray_images::app::cli::run();
}
