//! Sprite image loading

use std::path::Path;

use anyhow::{Context, Result, bail};
use image::{Rgba, RgbaImage};

use crate::renderer::Sprite;

/// Pixels of exactly this colour are transparent
pub const COLOR_KEY: Rgba<u8> = Rgba([0, 255, 255, 255]);

/// Load one image file as RGBA
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)
        .with_context(|| format!("Couldn't load image {}", path.display()))?;
    Ok(image.to_rgba8())
}

/// Make every colour-key pixel fully transparent, ignoring its alpha
pub fn apply_color_key(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        if pixel.0[..3] == COLOR_KEY.0[..3] {
            pixel.0[3] = 0;
        }
    }
}

/// Every sprite image, colour-keyed and ready for upload
pub struct SpriteSheet {
    images: Vec<RgbaImage>,
}

impl SpriteSheet {
    /// Load all sprites from `dir`. Any missing or unreadable image fails the whole load.
    pub fn load(dir: &Path) -> Result<Self> {
        let images = Sprite::ALL
            .iter()
            .map(|sprite| {
                let mut image = load_image(&dir.join(sprite.file_name()))?;
                apply_color_key(&mut image);
                Ok(image)
            })
            .collect::<Result<Vec<_>>>()?;
        log::info!("Loaded {} sprites from {}", images.len(), dir.display());
        Self::from_images(images)
    }

    /// Build a sheet from images ordered like `Sprite::ALL`
    pub fn from_images(images: Vec<RgbaImage>) -> Result<Self> {
        if images.len() != Sprite::COUNT {
            bail!("Expected {} sprite images, got {}", Sprite::COUNT, images.len());
        }
        Ok(Self { images })
    }

    pub fn image(&self, sprite: Sprite) -> &RgbaImage {
        &self.images[sprite.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shaft-hop-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_color_key_clears_only_cyan() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        image.put_pixel(0, 0, Rgba([0, 255, 255, 255]));
        image.put_pixel(1, 1, Rgba([0, 255, 254, 255]));
        apply_color_key(&mut image);

        assert_eq!(image.get_pixel(0, 0).0, [0, 255, 255, 0]);
        assert_eq!(image.get_pixel(1, 0).0, [10, 20, 30, 255]);
        assert_eq!(image.get_pixel(1, 1).0, [0, 255, 254, 255]);
    }

    #[test]
    fn test_missing_image_names_path() {
        let err = load_image(Path::new("no-such-dir/player.bmp")).unwrap_err();
        assert!(format!("{err:#}").contains("player.bmp"));
    }

    #[test]
    fn test_sheet_needs_every_sprite() {
        let images = vec![RgbaImage::new(1, 1); 3];
        assert!(SpriteSheet::from_images(images).is_err());
    }

    #[test]
    fn test_load_directory_of_bitmaps() {
        let dir = scratch_dir("sheet");
        for (i, sprite) in Sprite::ALL.iter().enumerate() {
            let mut image = RgbaImage::from_pixel(4, 2, Rgba([i as u8, 0, 0, 255]));
            image.put_pixel(3, 1, COLOR_KEY);
            image.save(dir.join(sprite.file_name())).unwrap();
        }

        let sheet = SpriteSheet::load(&dir).unwrap();
        let digit = sheet.image(Sprite::Digit(9));
        assert_eq!(digit.dimensions(), (4, 2));
        assert_eq!(digit.get_pixel(0, 0).0[0], 17);
        assert_eq!(digit.get_pixel(3, 1).0[3], 0);

        std::fs::remove_file(dir.join("carrot.bmp")).unwrap();
        let err = SpriteSheet::load(&dir).err().unwrap();
        assert!(format!("{err:#}").contains("carrot.bmp"));
        std::fs::remove_dir_all(&dir).ok();
    }
}
