//! Seeded open-set train/test split.
//!
//! Subjects are partitioned into enrolled (known) and unenrolled (unknown)
//! sets. Enrolled subjects contribute samples to both the training and test
//! partitions; unenrolled subjects appear only in the test partition with
//! the `Unknown` label. A fixed seed yields a fixed split.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use openset_core::config::DatasetConfig;
use openset_core::errors::DataError;
use openset_core::SubjectLabel;

/// A single sample: where it lives on disk and what it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRef {
    pub path: PathBuf,
    pub label: SubjectLabel,
}

/// Enrolled subject id → contiguous class index.
///
/// Indices are assigned in sorted subject order so the mapping is stable
/// across runs regardless of shuffle order.
#[derive(Debug, Clone, Default)]
pub struct SubjectMapping {
    classes: BTreeMap<String, u32>,
}

impl SubjectMapping {
    /// Build the mapping from the enrolled subject set.
    pub fn new(enrolled: &[String]) -> Self {
        let mut sorted: Vec<&String> = enrolled.iter().collect();
        sorted.sort();
        let classes = sorted
            .into_iter()
            .enumerate()
            .map(|(idx, subject)| (subject.clone(), idx as u32))
            .collect();
        Self { classes }
    }

    pub fn class_of(&self, subject: &str) -> Option<u32> {
        self.classes.get(subject).copied()
    }

    /// Number of enrolled classes; sizes the model's output layer.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The full open-set split: train partition (enrolled only), test partition
/// (enrolled + unenrolled), and the class mapping.
#[derive(Debug, Clone)]
pub struct OpenSetSplit {
    pub train: Vec<SampleRef>,
    pub test: Vec<SampleRef>,
    pub mapping: SubjectMapping,
}

/// Build the open-set split from the dataset configuration.
///
/// Samples for subject `s` are expected under
/// `<root>/<s>/<hand>/<spectrum>/*.bin`, one flattened sample per file.
pub fn open_set_split(cfg: &DatasetConfig) -> Result<OpenSetSplit, DataError> {
    let mut rng = StdRng::seed_from_u64(cfg.seed());

    let mut subjects = cfg.subjects.clone();
    subjects.shuffle(&mut rng);

    let known_count = ((subjects.len() as f64) * cfg.known_fraction()).ceil() as usize;
    let known_count = known_count.min(subjects.len());
    let (enrolled, unenrolled) = subjects.split_at(known_count);

    if enrolled.is_empty() {
        return Err(DataError::EmptySplit { partition: "enrolled" });
    }
    if unenrolled.is_empty() {
        return Err(DataError::EmptySplit {
            partition: "unenrolled",
        });
    }

    let mapping = SubjectMapping::new(enrolled);
    let mut train = Vec::new();
    let mut test = Vec::new();

    for subject in enrolled {
        let class = mapping
            .class_of(subject)
            .expect("enrolled subject always has a class");
        let mut samples = list_subject_samples(cfg, subject)?;
        samples.shuffle(&mut rng);

        // Keep at least one test sample per enrolled subject so the scorer
        // always sees every class.
        let train_count = ((samples.len() as f64) * cfg.train_fraction()).floor() as usize;
        let train_count = train_count.min(samples.len().saturating_sub(1));

        for (i, path) in samples.into_iter().enumerate() {
            let sample = SampleRef {
                path,
                label: SubjectLabel::Known(class),
            };
            if i < train_count {
                train.push(sample);
            } else {
                test.push(sample);
            }
        }
    }

    for subject in unenrolled {
        for path in list_subject_samples(cfg, subject)? {
            test.push(SampleRef {
                path,
                label: SubjectLabel::Unknown,
            });
        }
    }

    tracing::debug!(
        enrolled = enrolled.len(),
        unenrolled = unenrolled.len(),
        train_samples = train.len(),
        test_samples = test.len(),
        "open-set split built"
    );

    Ok(OpenSetSplit { train, test, mapping })
}

/// List a subject's sample files in sorted order.
fn list_subject_samples(cfg: &DatasetConfig, subject: &str) -> Result<Vec<PathBuf>, DataError> {
    let dir = cfg.root().join(subject).join(cfg.hand()).join(cfg.spectrum());
    let entries = std::fs::read_dir(&dir).map_err(|e| DataError::Io {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DataError::Io {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "bin") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
