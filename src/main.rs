use dog_image_fetcher::{Downloader, BREED_IMAGES};

fn main() {
    let downloader = Downloader::new("images");

    println!("Downloading dog breed images...");

    downloader.download_all(BREED_IMAGES);

    println!("\nAll images downloaded successfully!");
}
