// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Value parsers for vector arguments.

/// Parses `x,y,z` into three finite floats.
pub(crate) fn parse_vec3(s: &str) -> Result<[f32; 3], String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("`{p}`: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    let [x, y, z] = parts[..] else {
        return Err(format!("expected three comma-separated numbers, got `{s}`"));
    };
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return Err(format!("components must be finite, got `{s}`"));
    }
    Ok([x, y, z])
}

/// Parses `id=x,y,z`.
pub(crate) fn parse_body_velocity(s: &str) -> Result<(usize, [f32; 3]), String> {
    let (id, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=X,Y,Z, got `{s}`"))?;
    let id = id
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("body id `{id}`: {e}"))?;
    Ok((id, parse_vec3(v)?))
}
