use crate::entities::SPInstance;
use crate::io::ext_repr::{ExtItem, ExtSPInstance};
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::warn;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtSPInstance) -> Result<SPInstance> {
    let items = ext_instance
        .items
        .iter()
        .sorted_by_key(|item| item.id)
        .collect_vec();

    ensure!(
        items.iter().enumerate().all(|(i, item)| item.id == i as u64),
        "All items should have consecutive IDs starting from 0. IDs: {:?}",
        items.iter().map(|item| item.id).collect_vec()
    );

    let dimensions = items
        .iter()
        .map(|item| (item.width, item.height))
        .collect_vec();

    let instance = SPInstance::new(ext_instance.strip_width, &dimensions)
        .with_context(|| format!("could not import instance '{}'", ext_instance.name))?;
    Ok(instance)
}

/// Parses the plain-text rectangle list format.
///
/// The first non-empty line holds the strip width and the number of rectangles: `width,n`.
/// Every following non-empty line holds the dimensions of one rectangle: `w,h`.
/// Values are separated by commas and/or whitespace.
pub fn parse_rect_list(name: &str, content: &str) -> Result<ExtSPInstance> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (strip_width, n_declared) = match lines.next() {
        Some((line_nr, line)) => parse_pair(line).with_context(|| format!("line {line_nr}"))?,
        None => bail!("empty rectangle list, expected a 'width,n' header"),
    };

    let items = lines
        .enumerate()
        .map(|(id, (line_nr, line))| -> Result<ExtItem> {
            let (width, height) = parse_pair(line).with_context(|| format!("line {line_nr}"))?;
            Ok(ExtItem {
                id: id as u64,
                width,
                height,
            })
        })
        .collect::<Result<Vec<ExtItem>>>()?;

    if n_declared != items.len() as f32 {
        warn!(
            "[IO] header declares {} rectangles, but {} were listed",
            n_declared,
            items.len()
        );
    }

    Ok(ExtSPInstance {
        name: name.to_string(),
        strip_width,
        items,
    })
}

fn parse_pair(line: &str) -> Result<(f32, f32)> {
    let values = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f32>()
                .with_context(|| format!("could not parse '{s}' as a number"))
        })
        .collect::<Result<Vec<f32>>>()?;

    match values.as_slice() {
        [a, b] => Ok((*a, *b)),
        _ => bail!("expected two values, found {}: '{line}'", values.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_list() {
        let content = "5,3\n3,2\n2, 2\n\n2 3\n";
        let ext = parse_rect_list("small", content).unwrap();
        assert_eq!(ext.strip_width, 5.0);
        assert_eq!(
            ext.items.iter().map(|i| (i.id, i.width, i.height)).collect_vec(),
            vec![(0, 3.0, 2.0), (1, 2.0, 2.0), (2, 2.0, 3.0)]
        );

        let instance = import(&ext).unwrap();
        assert_eq!(instance.strip_width(), 5.0);
        assert_eq!(instance.n_items(), 3);
    }

    #[test]
    fn rect_list_errors() {
        assert!(parse_rect_list("empty", "  \n").is_err());
        assert!(parse_rect_list("bad", "5,2\n3,x\n").is_err());
        assert!(parse_rect_list("triple", "5,1\n3,2,1\n").is_err());
    }

    #[test]
    fn json_items_reordered_by_id() {
        let json = r#"{
            "name": "json",
            "strip_width": 4.0,
            "items": [
                {"id": 1, "width": 1.0, "height": 3.0},
                {"id": 0, "width": 2.0, "height": 1.0}
            ]
        }"#;
        let ext: ExtSPInstance = serde_json::from_str(json).unwrap();
        let instance = import(&ext).unwrap();
        assert_eq!(instance.item(0).width, 2.0);
        assert_eq!(instance.item(1).height, 3.0);
    }

    #[test]
    fn non_consecutive_ids() {
        let ext = ExtSPInstance {
            name: "gap".into(),
            strip_width: 4.0,
            items: vec![
                ExtItem {
                    id: 0,
                    width: 1.0,
                    height: 1.0,
                },
                ExtItem {
                    id: 2,
                    width: 1.0,
                    height: 1.0,
                },
            ],
        };
        assert!(import(&ext).is_err());
    }

    #[test]
    fn invalid_dimensions_surface_as_error() {
        let ext = ExtSPInstance {
            name: "neg".into(),
            strip_width: -4.0,
            items: vec![],
        };
        let err = import(&ext).unwrap_err();
        assert!(
            err.downcast_ref::<crate::error::SolveError>()
                .is_some_and(|e| e.is_invalid_input())
        );
    }
}
