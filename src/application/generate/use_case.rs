//! Generate Use Case
//!
//! 1. Resolve answers and render the tree in memory
//! 2. Check the destination
//! 3. Materialize, unless this is a dry run
//!
//! The destination is checked in dry runs too, so a dry run fails exactly
//! where a real run would.

use crate::application::materialize::Materializer;
use crate::application::pipeline::ProjectPipeline;
use crate::domain::ports::{FileSystem, RenderEvent, RenderEventSink};
use crate::domain::services::RawAnswers;
use crate::error::KeelResult;

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case, parameterized by its file system port
pub struct GenerateUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
}

impl<FS> GenerateUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn execute(
        &self,
        raw: &RawAnswers,
        options: &GenerateOptions,
        events: &dyn RenderEventSink,
    ) -> KeelResult<GenerateResult> {
        events.on_event(RenderEvent::Started {
            destination: options.destination.clone(),
        });

        let prepared = ProjectPipeline::new()
            .with_validation(options.validate_syntax)
            .with_answers_file(options.answers_file.clone())
            .run(raw, events)?;

        let materializer = Materializer::new(&self.file_system);
        let replaced = if options.dry_run {
            materializer.check_destination(&options.destination, options.force)?;
            tracing::info!(destination = %options.destination.display(), "dry run, nothing written");
            false
        } else {
            materializer
                .materialize(&prepared.artifact, &options.destination, options.force, events)?
                .replaced
        };

        let files: Vec<String> = prepared
            .artifact
            .files()
            .map(|(path, _)| path.to_string())
            .collect();

        events.on_event(RenderEvent::Completed {
            destination: options.destination.clone(),
            file_count: files.len(),
            dry_run: options.dry_run,
        });

        Ok(GenerateResult {
            destination: options.destination.clone(),
            dir_count: prepared.artifact.dirs().count(),
            digest: prepared.artifact.digest(),
            flags: prepared.resolution.flags,
            defaulted: prepared.resolution.defaulted,
            files,
            validated: prepared.validated,
            dry_run: options.dry_run,
            replaced,
        })
    }
}
