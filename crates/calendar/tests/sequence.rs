use wellcast_calendar::{Month, idx_from_ymd, month_day_grid, month_sequence, weighted_histogram};

#[test]
fn grid_covers_whole_months_around_a_year_boundary() {
    let a = idx_from_ymd(2000, 12, 31).unwrap();
    let b = idx_from_ymd(2001, 1, 1).unwrap();
    let grid = month_day_grid(a, b).unwrap();
    assert_eq!(grid.len(), 62);
    assert_eq!(grid[0], idx_from_ymd(2000, 12, 1).unwrap());
    assert_eq!(*grid.last().unwrap(), idx_from_ymd(2001, 1, 31).unwrap());
}

#[test]
fn month_sequence_lengths_match() {
    let start = Month::new(2000, 1).unwrap();
    for n in [0, 1, 12, 25] {
        let months = month_sequence(start, n);
        assert_eq!(months.len(), n, "expected {n} months, got {}", months.len());
    }
}

#[test]
fn histogram_over_month_edges_sums_daily_values() {
    // Daily rate 1.0 over Jan + Feb 2020, binned by calendar month.
    let jan = Month::new(2020, 1).unwrap();
    let feb = jan.next();
    let grid = month_day_grid(jan.first_idx(), feb.last_idx()).unwrap();
    let values: Vec<f64> = grid.iter().map(|&d| d as f64).collect();
    let weights = vec![1.0; grid.len()];
    let edges = [
        jan.first_idx() as f64,
        feb.first_idx() as f64,
        feb.next().first_idx() as f64,
    ];
    let h = weighted_histogram(&values, &weights, &edges).unwrap();
    assert_eq!(h, vec![31.0, 29.0]);
}
