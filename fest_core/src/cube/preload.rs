//! Frame fetching with format fallback, and the sequential preloader.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use super::cache::{ImageCache, ImageSource};
use super::frames::{FrameSet, ImageFormat};
use crate::error::{FestError, Result};

/// A frame that decoded successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedFrame<I> {
    /// Frame index.
    pub index: usize,
    /// URL the image was loaded from.
    pub src: String,
    /// Decoded image handle.
    pub image: I,
}

/// Loads frames through the cache, falling back from webp to png.
///
/// The first webp failure flips the preferred format to png for every later
/// request, so a server without webp frames costs one failed request, not
/// one per frame.
pub struct FrameFetcher<S: ImageSource> {
    cache: Rc<ImageCache<S>>,
    frames: FrameSet,
    preferred: Cell<ImageFormat>,
}

impl<S: ImageSource> FrameFetcher<S> {
    /// Fetcher over a shared cache.
    pub fn new(cache: Rc<ImageCache<S>>, frames: FrameSet) -> Self {
        Self {
            cache,
            frames,
            preferred: Cell::new(ImageFormat::Webp),
        }
    }

    /// Frame layout.
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Underlying cache.
    pub fn cache(&self) -> &ImageCache<S> {
        &self.cache
    }

    /// Format the next request starts with.
    pub fn preferred_format(&self) -> ImageFormat {
        self.preferred.get()
    }

    /// Load frame `index`, trying each format in turn.
    pub async fn fetch(&self, index: usize) -> Result<LoadedFrame<S::Image>> {
        let index = self.frames.clamp(index);
        let mut format = Some(self.preferred.get());
        while let Some(current) = format {
            let src = self.frames.path(index, current)?;
            match self.cache.load(&src).await {
                Ok(image) => return Ok(LoadedFrame { index, src, image }),
                Err(err) => {
                    debug!(%err, frame = index, "cube frame failed");
                    if current == ImageFormat::Webp {
                        self.preferred.set(ImageFormat::Png);
                    }
                    format = current.fallback();
                }
            }
        }
        Err(FestError::FrameExhausted { index })
    }
}

/// Progress report emitted after each attempted frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameProgress<I> {
    /// Frame just attempted.
    pub index: usize,
    /// Frames attempted so far, failures included.
    pub attempted: usize,
    /// Size of the sequence.
    pub total: usize,
    /// The frame, when it loaded.
    pub loaded: Option<LoadedFrame<I>>,
}

impl<I> FrameProgress<I> {
    /// Integer percentage of attempted frames.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        (self.attempted.min(self.total) * 100 / self.total) as u8
    }

    /// Whether every frame has been attempted.
    pub fn is_complete(&self) -> bool {
        self.attempted >= self.total
    }
}

/// Fetch every frame strictly in order, reporting after each one.
///
/// Exhausted frames are logged, counted and skipped. Returns the number of
/// frames that loaded.
pub async fn preload_sequential<S, F>(fetcher: Rc<FrameFetcher<S>>, mut on_frame: F) -> usize
where
    S: ImageSource,
    F: FnMut(FrameProgress<S::Image>),
{
    let total = fetcher.frames().total();
    let mut loaded_count = 0;
    for index in 0..total {
        let loaded = match fetcher.fetch(index).await {
            Ok(frame) => {
                loaded_count += 1;
                Some(frame)
            }
            Err(err) => {
                debug!(%err, "skipping cube frame");
                None
            }
        };
        on_frame(FrameProgress {
            index,
            attempted: index + 1,
            total,
            loaded,
        });
    }
    debug!(loaded = loaded_count, total, "cube preload finished");
    loaded_count
}

#[cfg(test)]
mod tests {
    use super::super::cache::testing::ScriptedSource;
    use super::*;
    use crate::assets::AssetPaths;
    use crate::config::CubeConfig;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    fn fetcher(source: ScriptedSource, total: usize) -> Rc<FrameFetcher<ScriptedSource>> {
        let config = CubeConfig {
            total_frames: total,
            ..CubeConfig::default()
        };
        let frames = FrameSet::new(AssetPaths::default(), &config);
        Rc::new(FrameFetcher::new(Rc::new(ImageCache::new(source)), frames))
    }

    #[test]
    fn webp_failure_falls_back_and_downgrades() {
        let source = ScriptedSource::failing(["/images/cube/frame_002.webp".to_string()]);
        let fetcher = fetcher(source.clone(), 10);

        let frame = block_on(fetcher.fetch(2)).unwrap();
        assert_eq!(frame.src, "/images/cube/frame_002.png");
        assert_eq!(fetcher.preferred_format(), ImageFormat::Png);

        let next = block_on(fetcher.fetch(3)).unwrap();
        assert_eq!(next.src, "/images/cube/frame_003.png");
        assert_eq!(
            source.requested(),
            vec![
                "/images/cube/frame_002.webp".to_string(),
                "/images/cube/frame_002.png".to_string(),
                "/images/cube/frame_003.png".to_string(),
            ]
        );
    }

    #[test]
    fn both_formats_failing_is_exhausted() {
        let source = ScriptedSource::failing([
            "/images/cube/frame_004.webp".to_string(),
            "/images/cube/frame_004.png".to_string(),
        ]);
        let fetcher = fetcher(source, 10);
        assert_eq!(
            block_on(fetcher.fetch(4)),
            Err(FestError::FrameExhausted { index: 4 })
        );
    }

    #[test]
    fn preload_progress_is_monotonic_and_completes_despite_failures() {
        let source = ScriptedSource::failing([
            "/images/cube/frame_001.webp".to_string(),
            "/images/cube/frame_001.png".to_string(),
            "/images/cube/frame_003.png".to_string(),
        ]);
        let fetcher = fetcher(source, 4);
        let mut seen = Vec::new();

        let loaded = block_on(preload_sequential(fetcher, |progress| {
            seen.push((progress.index, progress.percent(), progress.loaded.is_some()));
        }));

        assert_eq!(loaded, 2);
        assert_eq!(
            seen,
            vec![(0, 25, true), (1, 50, false), (2, 75, true), (3, 100, false)]
        );
    }

    #[test]
    fn preload_reuses_cached_seed() {
        let source = ScriptedSource::default();
        let fetcher = fetcher(source.clone(), 3);
        block_on(fetcher.fetch(1)).unwrap();
        block_on(preload_sequential(fetcher, |_| {}));
        assert_eq!(source.requested().len(), 3);
    }

    #[test]
    fn empty_sequence_reports_full_progress() {
        let progress: FrameProgress<String> = FrameProgress {
            index: 0,
            attempted: 0,
            total: 0,
            loaded: None,
        };
        assert_eq!(progress.percent(), 100);
        assert!(progress.is_complete());
    }
}
