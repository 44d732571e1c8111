//! Shape checks run between loading and drawing.

use crate::core::{
    color::Color, config::ChartConfig, data::Dataset, error::GraphError,
};

/// Check `data` is drawable with `colors` under `cfg`.
///
/// Returns the category count.  The chart renderer relies on every
/// condition checked here.
pub fn check_data(data: &Dataset, colors: &[Color], cfg: &ChartConfig) -> Result<usize, GraphError> {
    if data.labels.len() != data.rows.len() {
        return Err(GraphError::ShapeMismatch {
            labels: data.labels.len(),
            rows: data.rows.len(),
        });
    }
    let categories = data.category_count();
    if categories == 0 {
        return Err(GraphError::EmptyData);
    }

    if let Some((i, row)) = data
        .rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != categories)
    {
        return Err(GraphError::MissingValues {
            row: i + 1,
            expected: categories,
            got: row.len(),
        });
    }
    if !data.categories.is_empty() && data.categories.len() != categories {
        return Err(GraphError::CategoryCount {
            names: data.categories.len(),
            categories,
        });
    }

    if !colors.is_empty() && colors.len() != categories {
        return Err(GraphError::ColorCount {
            colors: colors.len(),
            categories,
        });
    }

    if cfg.vertical && categories > 1 && !cfg.different_scale {
        return Err(GraphError::UnsupportedVertical);
    }
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            Vec::new(),
            ["2007", "2008", "2009", "2010"].map(String::from).to_vec(),
            vec![
                vec![20.5, 30.5],
                vec![0.0, 60.0],
                vec![10.0, 100.0],
                vec![70.0, 80.0],
            ],
        )
    }

    #[test]
    fn accepts_well_formed_data() {
        assert_eq!(check_data(&sample(), &[], &ChartConfig::default()).unwrap(), 2);
    }

    #[test]
    fn label_count_must_match_rows() {
        let mut d = sample();
        d.labels.push("2011".into());
        assert!(matches!(
            check_data(&d, &[], &ChartConfig::default()),
            Err(GraphError::ShapeMismatch { labels: 5, rows: 4 })
        ));
        d.labels.truncate(3);
        assert!(matches!(
            check_data(&d, &[], &ChartConfig::default()),
            Err(GraphError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn every_row_needs_every_category() {
        let mut d = sample();
        d.rows[2] = vec![10.0];
        assert!(matches!(
            check_data(&d, &[], &ChartConfig::default()),
            Err(GraphError::MissingValues { row: 3, expected: 2, got: 1 })
        ));
    }

    #[test]
    fn header_must_name_every_category() {
        let mut d = sample();
        d.categories = vec!["boys".into()];
        assert!(matches!(
            check_data(&d, &[], &ChartConfig::default()),
            Err(GraphError::CategoryCount { names: 1, categories: 2 })
        ));
    }

    #[test]
    fn colour_count_must_match_categories() {
        let d = sample();
        let cfg = ChartConfig::default();
        assert!(check_data(&d, &[Color::Blue, Color::Magenta], &cfg).is_ok());
        assert!(matches!(
            check_data(&d, &[Color::Blue], &cfg),
            Err(GraphError::ColorCount { colors: 1, categories: 2 })
        ));
        assert!(matches!(
            check_data(&d, &[Color::Blue, Color::Magenta, Color::Yellow], &cfg),
            Err(GraphError::ColorCount { .. })
        ));
    }

    #[test]
    fn vertical_needs_single_series_or_different_scale() {
        let d = sample();
        let vertical = ChartConfig::builder().vertical(true).build().unwrap();
        assert!(matches!(
            check_data(&d, &[], &vertical),
            Err(GraphError::UnsupportedVertical)
        ));
        let independent = ChartConfig::builder()
            .vertical(true)
            .different_scale(true)
            .build()
            .unwrap();
        assert!(check_data(&d, &[], &independent).is_ok());
    }

    #[test]
    fn rows_without_values_are_empty() {
        let d = Dataset::new(Vec::new(), vec!["a".into()], vec![vec![]]);
        assert!(matches!(
            check_data(&d, &[], &ChartConfig::default()),
            Err(GraphError::EmptyData)
        ));
    }
}
