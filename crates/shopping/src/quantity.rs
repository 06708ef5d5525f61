use fraction::{Fraction, ToPrimitive};

pub fn zero() -> Fraction {
    Fraction::new(0u64, 1u64)
}

/// Exact fraction of a decimal amount: 0.5 → 1/2, 1.25 → 5/4.
///
/// Negative, NaN and infinite amounts carry no usable quantity.
pub fn from_amount(amount: f64) -> Option<Fraction> {
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }

    Some(Fraction::from(amount))
}

pub fn to_f64(quantity: Fraction) -> f64 {
    quantity.to_f64().unwrap_or_default()
}

/// Round to hundredths, the precision quantities are reported with.
pub fn round_to_hundredths(quantity: Fraction) -> Fraction {
    let hundredths = (to_f64(quantity) * 100.0).round();
    if hundredths <= 0.0 {
        return zero();
    }

    Fraction::new(hundredths as u64, 100u64)
}

/// Round to a value you can measure in a kitchen
///
/// Rounding rules:
/// - < 1: nearest 1/4, 1/3 or 1/2
/// - 1-10: nearest 1/2
/// - > 10: nearest whole number
///
/// Tiny amounts that would round to nothing keep their hundredths value.
pub fn round_to_practical_value(quantity: Fraction) -> Fraction {
    let value = to_f64(quantity);

    let rounded = if value < 1.0 {
        let candidates = [4u64, 3, 2].map(|denom| {
            let count = (value * denom as f64).round();
            (count, denom, (value - count / denom as f64).abs())
        });

        let (count, denom, _) = candidates
            .into_iter()
            .fold(candidates[0], |best, c| if c.2 < best.2 { c } else { best });

        Fraction::new(count as u64, denom)
    } else if value < 10.0 {
        Fraction::new((value * 2.0).round() as u64, 2u64)
    } else {
        Fraction::new(value.round() as u64, 1u64)
    };

    if rounded == zero() && value > 0.0 {
        return round_to_hundredths(quantity);
    }

    rounded
}

/// Human readable fraction: 2 → "2", 3/2 → "1 1/2", 1/4 → "1/4".
pub fn format_quantity(quantity: Fraction) -> String {
    let (Some(&numer), Some(&denom)) = (quantity.numer(), quantity.denom()) else {
        return to_f64(quantity).to_string();
    };

    if denom == 1 {
        return numer.to_string();
    }

    let whole = numer / denom;
    let remainder = numer % denom;

    match (whole, remainder) {
        (whole, 0) => whole.to_string(),
        (0, remainder) => format!("{remainder}/{denom}"),
        (whole, remainder) => format!("{whole} {remainder}/{denom}"),
    }
}

/// Display form of a stored decimal quantity.
pub fn display_quantity(quantity: f64) -> Option<String> {
    from_amount(quantity).map(|q| format_quantity(round_to_practical_value(q)))
}
