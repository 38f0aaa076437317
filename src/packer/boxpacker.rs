//! Generic 3D bin packing
//!
//! A whole-millimetre, whole-gram packing solver. Items may rotate into any
//! of their six axis permutations; placement inside a box is shelf-based
//! (rows advance along the width, then the length, then stack into a new
//! layer). Box selection is greedy: the smallest box that takes everything
//! wins, otherwise boxes are filled one at a time, maximising the number of
//! items placed and then minimising wasted volume, so the box count stays
//! minimal.

use crate::domain::errors::PackingError;

/// An item to be packed, in whole millimetres and grams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackItem {
    pub description: String,
    pub width: u64,
    pub length: u64,
    pub depth: u64,
    pub weight: u64,
    /// Volume as supplied by the adapter; kept separate from the rounded
    /// edges so utilisation reflects the real item.
    pub volume: u64,
}

impl PackItem {
    /// The six axis permutations of the item's edges.
    fn orientations(&self) -> Vec<(u64, u64, u64)> {
        let (w, l, d) = (self.width, self.length, self.depth);
        let mut all = vec![
            (w, l, d),
            (w, d, l),
            (l, w, d),
            (l, d, w),
            (d, w, l),
            (d, l, w),
        ];
        all.sort_unstable();
        all.dedup();
        all
    }
}

/// A candidate box, in whole millimetres and grams.
///
/// Outer dimensions equal inner dimensions; there is no wall-thickness model.
/// `max_weight` is the gross limit, box included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackBox {
    pub reference: String,
    pub inner_width: u64,
    pub inner_length: u64,
    pub inner_depth: u64,
    pub empty_weight: u64,
    pub max_weight: u64,
}

impl PackBox {
    pub fn inner_volume(&self) -> u64 {
        self.inner_width * self.inner_length * self.inner_depth
    }
}

/// One filled box produced by [`Packer::pack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packed {
    pub box_spec: PackBox,
    pub items: Vec<PackItem>,
}

impl Packed {
    /// Gross weight: the empty box plus everything in it.
    pub fn gross_weight(&self) -> u64 {
        self.box_spec.empty_weight + self.items.iter().map(|item| item.weight).sum::<u64>()
    }

    pub fn items_volume(&self) -> u64 {
        self.items.iter().map(|item| item.volume).sum()
    }
}

/// Cursor state for shelf placement inside one box.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    x: u64,
    y: u64,
    z: u64,
    row_length: u64,
    layer_depth: u64,
}

/// The packing solver. Collects boxes and items, then packs once.
#[derive(Debug, Default)]
pub struct Packer {
    boxes: Vec<PackBox>,
    items: Vec<PackItem>,
}

impl Packer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_box(&mut self, pack_box: PackBox) -> &mut Self {
        self.boxes.push(pack_box);
        self
    }

    pub fn add_item(&mut self, item: PackItem) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Packs all items into the fewest boxes.
    ///
    /// Fails with [`PackingError::ItemTooLarge`] when some item fits no
    /// candidate box in any orientation (or breaches every box's weight
    /// limit); in that case no partial result is produced.
    pub fn pack(mut self) -> Result<Vec<Packed>, PackingError> {
        if self.items.is_empty() {
            return Ok(Vec::new());
        }

        for item in &self.items {
            if !self.boxes.iter().any(|b| item_fits_box(item, b)) {
                return Err(PackingError::ItemTooLarge {
                    item: item.description.clone(),
                });
            }
        }

        // Smallest boxes first, biggest items first.
        self.boxes.sort_by_key(PackBox::inner_volume);
        self.items.sort_by(|a, b| b.volume.cmp(&a.volume));

        let mut packed = Vec::new();
        let mut remaining = self.items;

        while !remaining.is_empty() {
            // Prefer the single smallest box that takes everything left.
            let complete_fit = self.boxes.iter().find_map(|candidate| {
                let (placed, leftover) = fit_items(candidate, &remaining);
                leftover.is_empty().then_some((candidate, placed))
            });

            if let Some((candidate, placed)) = complete_fit {
                packed.push(Packed {
                    box_spec: candidate.clone(),
                    items: placed,
                });
                break;
            }

            // Otherwise fill whichever box takes the most items, breaking
            // ties on least wasted volume, and continue with the leftovers.
            let mut best: Option<(&PackBox, Vec<PackItem>, Vec<PackItem>, u64)> = None;
            for candidate in &self.boxes {
                let (placed, leftover) = fit_items(candidate, &remaining);
                if placed.is_empty() {
                    continue;
                }
                let placed_volume: u64 = placed.iter().map(|item| item.volume).sum();
                let waste = candidate.inner_volume().saturating_sub(placed_volume);
                let better = match &best {
                    None => true,
                    Some((_, best_placed, _, best_waste)) => {
                        placed.len() > best_placed.len()
                            || (placed.len() == best_placed.len() && waste < *best_waste)
                    }
                };
                if better {
                    best = Some((candidate, placed, leftover, waste));
                }
            }

            match best {
                Some((candidate, placed, leftover, _)) => {
                    packed.push(Packed {
                        box_spec: candidate.clone(),
                        items: placed,
                    });
                    remaining = leftover;
                }
                // Unreachable: the up-front fit check guarantees the largest
                // remaining item goes into some box on its own.
                None => {
                    return Err(PackingError::ItemTooLarge {
                        item: remaining[0].description.clone(),
                    })
                }
            }
        }

        Ok(packed)
    }
}

/// Whether an item fits an empty box in any orientation, within weight.
fn item_fits_box(item: &PackItem, pack_box: &PackBox) -> bool {
    if pack_box.empty_weight + item.weight > pack_box.max_weight {
        return false;
    }
    item.orientations().into_iter().any(|(w, l, d)| {
        w <= pack_box.inner_width && l <= pack_box.inner_length && d <= pack_box.inner_depth
    })
}

/// Shelf placement of as many items as possible into one box.
///
/// Items are taken in the given order; each tries every orientation at the
/// current cursor, keeping whichever placement advances least into new rows
/// and layers. Items that don't fit (geometry or gross weight) drop into the
/// leftover list.
fn fit_items(pack_box: &PackBox, items: &[PackItem]) -> (Vec<PackItem>, Vec<PackItem>) {
    let mut placed = Vec::new();
    let mut leftover = Vec::new();
    let mut cursor = Cursor::default();
    let mut gross_weight = pack_box.empty_weight;

    for item in items {
        if gross_weight + item.weight > pack_box.max_weight {
            leftover.push(item.clone());
            continue;
        }

        // (z, y, x, depth) ascending: stay in the current row and layer when
        // possible, and keep layers flat.
        let mut best: Option<(Placement, (u64, u64, u64, u64))> = None;
        for (w, l, d) in item.orientations() {
            if let Some(placement) = try_place(pack_box, cursor, w, l, d) {
                let score = (placement.z, placement.y, placement.x, d);
                if best.as_ref().map_or(true, |(_, s)| score < *s) {
                    best = Some((placement, score));
                }
            }
        }

        match best {
            Some((placement, _)) => {
                cursor.x = placement.x + placement.width;
                cursor.y = placement.y;
                cursor.z = placement.z;
                cursor.row_length = placement.row_length.max(placement.length);
                cursor.layer_depth = placement.layer_depth.max(placement.depth);
                gross_weight += item.weight;
                placed.push(item.clone());
            }
            None => leftover.push(item.clone()),
        }
    }

    (placed, leftover)
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    x: u64,
    y: u64,
    z: u64,
    width: u64,
    length: u64,
    depth: u64,
    row_length: u64,
    layer_depth: u64,
}

/// One orientation at the cursor: wrap to a new row when the width runs out,
/// to a new layer when the length runs out, fail when the depth runs out.
fn try_place(pack_box: &PackBox, cursor: Cursor, w: u64, l: u64, d: u64) -> Option<Placement> {
    if w > pack_box.inner_width || l > pack_box.inner_length || d > pack_box.inner_depth {
        return None;
    }

    let mut x = cursor.x;
    let mut y = cursor.y;
    let mut z = cursor.z;
    let mut row_length = cursor.row_length;
    let mut layer_depth = cursor.layer_depth;

    if x + w > pack_box.inner_width {
        x = 0;
        y += row_length;
        row_length = 0;
    }
    if y + l > pack_box.inner_length {
        x = 0;
        y = 0;
        z += layer_depth;
        row_length = 0;
        layer_depth = 0;
    }
    if z + d > pack_box.inner_depth {
        return None;
    }

    Some(Placement {
        x,
        y,
        z,
        width: w,
        length: l,
        depth: d,
        row_length,
        layer_depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(description: &str, w: u64, l: u64, d: u64, weight: u64) -> PackItem {
        PackItem {
            description: description.to_string(),
            width: w,
            length: l,
            depth: d,
            weight,
            volume: w * l * d,
        }
    }

    fn pack_box(reference: &str, w: u64, l: u64, d: u64, max_weight: u64) -> PackBox {
        PackBox {
            reference: reference.to_string(),
            inner_width: w,
            inner_length: l,
            inner_depth: d,
            empty_weight: 100,
            max_weight,
        }
    }

    #[test]
    fn test_single_item_single_box() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("cube", 300, 300, 300, 22_000));
        packer.add_item(item("mug", 100, 100, 100, 500));

        let packed = packer.pack().unwrap();
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].items.len(), 1);
        assert_eq!(packed[0].gross_weight(), 600);
    }

    #[test]
    fn test_smallest_sufficient_box_wins() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("large", 600, 600, 600, 22_000));
        packer.add_box(pack_box("small", 200, 200, 200, 22_000));
        packer.add_item(item("mug", 100, 100, 100, 500));

        let packed = packer.pack().unwrap();
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].box_spec.reference, "small");
    }

    #[test]
    fn test_rotation_allows_fit() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("flat", 500, 500, 120, 22_000));
        // Only fits lying down.
        packer.add_item(item("poster tube", 100, 100, 450, 800));

        let packed = packer.pack().unwrap();
        assert_eq!(packed.len(), 1);
    }

    #[test]
    fn test_item_too_large() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("small", 200, 200, 200, 22_000));
        packer.add_item(item("mug", 100, 100, 100, 500));
        packer.add_item(item("surfboard", 2100, 500, 100, 5_000));

        let err = packer.pack().unwrap_err();
        match err {
            PackingError::ItemTooLarge { item } => assert_eq!(item, "surfboard"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_weight_limit_counts_as_too_large() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("cube", 500, 500, 500, 1_000));
        packer.add_item(item("anvil", 100, 100, 100, 5_000));

        assert!(matches!(
            packer.pack(),
            Err(PackingError::ItemTooLarge { .. })
        ));
    }

    #[test]
    fn test_split_across_boxes_when_volume_runs_out() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("cube", 200, 200, 200, 22_000));
        // Each fills the box; eight would fit one 400-cube, not one 200-cube.
        for i in 0..2 {
            packer.add_item(item(&format!("block {i}"), 200, 200, 200, 1_000));
        }

        let packed = packer.pack().unwrap();
        assert_eq!(packed.len(), 2);
        assert!(packed.iter().all(|p| p.items.len() == 1));
    }

    #[test]
    fn test_split_across_boxes_when_weight_runs_out() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("cube", 500, 500, 500, 2_100));
        for i in 0..4 {
            packer.add_item(item(&format!("brick {i}"), 100, 100, 100, 1_000));
        }

        let packed = packer.pack().unwrap();
        // 2 bricks per box: 100g tare + 2 x 1000g = 2100g cap.
        assert_eq!(packed.len(), 2);
        assert!(packed.iter().all(|p| p.items.len() == 2));
    }

    #[test]
    fn test_conservation_of_items() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("small", 200, 200, 200, 5_000));
        packer.add_box(pack_box("large", 400, 400, 400, 22_000));
        let mut expected: Vec<String> = Vec::new();
        for i in 0..7 {
            let description = format!("widget {i}");
            packer.add_item(item(&description, 150, 120, 90, 300));
            expected.push(description);
        }

        let packed = packer.pack().unwrap();
        let mut actual: Vec<String> = packed
            .iter()
            .flat_map(|p| p.items.iter().map(|i| i.description.clone()))
            .collect();
        actual.sort();
        expected.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_no_items_packs_nothing() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("cube", 200, 200, 200, 5_000));
        assert!(packer.pack().unwrap().is_empty());
    }

    #[test]
    fn test_no_boxes_fails_for_first_item() {
        let mut packer = Packer::new();
        packer.add_item(item("mug", 100, 100, 100, 500));
        assert!(matches!(
            packer.pack(),
            Err(PackingError::ItemTooLarge { .. })
        ));
    }

    #[test]
    fn test_zero_sized_items_pack() {
        let mut packer = Packer::new();
        packer.add_box(pack_box("cube", 200, 200, 200, 5_000));
        packer.add_item(PackItem {
            description: "gift card".to_string(),
            width: 0,
            length: 0,
            depth: 0,
            weight: 0,
            volume: 0,
        });
        packer.add_item(item("mug", 100, 100, 100, 500));

        let packed = packer.pack().unwrap();
        assert_eq!(packed.len(), 1);
        assert_eq!(packed[0].items.len(), 2);
    }
}
