use crate::io::samples::SampleRow;

/// A structure acronym resolved against the sample annotation. An empty
/// column list means the acronym matched nothing; the caller decides whether
/// that is an error (the pipeline treats it as one).
#[derive(Debug, Clone, Default)]
pub struct ResolvedStructure {
    pub acronym: String,
    pub structure_id: String,
    pub name: String,
    pub columns: Vec<usize>,
}

/// Maps each requested acronym to the sample columns annotated with it.
/// Annotation row i (0-based, header excluded) describes expression-matrix
/// sample column i + 1; column 0 of the matrix holds the probe id. The
/// structure id and display name come from the first matching row.
pub fn resolve_columns(acronyms: &[String], samples: &[SampleRow]) -> Vec<ResolvedStructure> {
    let mut resolved: Vec<ResolvedStructure> = acronyms
        .iter()
        .map(|acronym| ResolvedStructure {
            acronym: acronym.clone(),
            ..ResolvedStructure::default()
        })
        .collect();

    for (row_idx, sample) in samples.iter().enumerate() {
        for entry in resolved.iter_mut() {
            if sample.structure_acronym == entry.acronym {
                if entry.columns.is_empty() {
                    entry.structure_id = sample.structure_id.clone();
                    entry.name = sample.structure_name.clone();
                }
                entry.columns.push(row_idx + 1);
            }
        }
    }

    resolved
}
