use tracing::{debug, info, warn};

use crate::{
    components::aircraft::Aircraft,
    environment::{AirportRegistry, Runway},
    resources::{ApproachConfig, AreaConfig},
    utils::{
        bearing, cross_track, distance, heading_delta, normalize_heading, opposite_sides,
        project, rad_to_deg,
    },
};

/// Whether the aircraft may start capturing the localizer or glideslope:
/// slow and low enough, and pointing within the distance-dependent cone
/// around the runway heading.
pub fn within_capture_gate(
    aircraft: &Aircraft,
    runway: &Runway,
    distance_nm: f64,
    config: &ApproachConfig,
) -> bool {
    if aircraft.airspeed >= config.max_capture_airspeed
        || aircraft.altitude >= config.max_capture_altitude
    {
        return false;
    }
    config
        .capture_cone(distance_nm)
        .map_or(false, |cone| heading_delta(aircraft.heading, runway.heading()) <= cone)
}

fn assigned_runway<'a>(aircraft: &mut Aircraft, registry: &'a AirportRegistry) -> Option<&'a Runway> {
    let name = aircraft.approach.runway.as_deref()?;
    let runway = registry.runway(name);
    if runway.is_none() {
        warn!("{} cleared for unknown runway {}, cancelling approach", aircraft.callsign, name);
        aircraft.reset_approach();
    }
    runway
}

/// Short final speed restriction and touchdown.
///
/// Short final begins once the glideslope is held inside the short final
/// distance. Touchdown happens over the threshold at or below the landing
/// height and puts the aircraft on the runway with every approach and
/// navigation mode cleared.
pub fn update_final_approach(
    aircraft: &mut Aircraft,
    registry: &AirportRegistry,
    area: &AreaConfig,
    config: &ApproachConfig,
) {
    let Some(runway) = assigned_runway(aircraft, registry) else {
        return;
    };
    let distance_nm = area.to_nm(distance(aircraft.position, runway.threshold()));

    if !aircraft.approach.short_final
        && aircraft.approach.glideslope_intercepted
        && distance_nm < config.short_final_nm
    {
        aircraft.approach.short_final = true;
        debug!("{} short final runway {}", aircraft.callsign, runway.name());
    }
    if aircraft.approach.short_final {
        aircraft.target_airspeed = config.short_final_airspeed;
    }

    let elevation = registry.elevation();
    if distance_nm <= config.touchdown_radius_nm
        && aircraft.altitude <= elevation + config.touchdown_height
    {
        touch_down(aircraft, runway, elevation);
    }
}

fn touch_down(aircraft: &mut Aircraft, runway: &Runway, elevation: f64) {
    aircraft.on_ground = Some(runway.name().to_string());
    aircraft.altitude = elevation;
    aircraft.target_altitude = elevation;
    aircraft.heading = runway.heading();
    aircraft.target_heading = runway.heading();
    aircraft.target_airspeed = 0.0;
    aircraft.target_waypoint = None;
    aircraft.turn_direction = None;
    aircraft.expedite_altitude = false;
    aircraft.expedite_speed = false;
    aircraft.hold = None;
    aircraft.reset_approach();
    info!("{} touched down runway {}", aircraft.callsign, runway.name());
}

/// Localizer capture and tracking, then glideslope capture and tracking.
pub fn update_ils(
    aircraft: &mut Aircraft,
    registry: &AirportRegistry,
    area: &AreaConfig,
    config: &ApproachConfig,
) {
    let Some(runway) = assigned_runway(aircraft, registry) else {
        return;
    };
    let threshold = runway.threshold();
    let distance_nm = area.to_nm(distance(aircraft.position, threshold));
    let gated = within_capture_gate(aircraft, runway, distance_nm, config);

    if aircraft.approach.localizer_intercepted {
        track_localizer(aircraft, runway, area, config);
    } else {
        if gated && crosses_centerline(aircraft, runway, area, config) {
            aircraft.approach.localizer_intercepted = true;
            debug!(
                "{} localizer captured runway {} at {:.1} nm",
                aircraft.callsign,
                runway.name(),
                distance_nm
            );
        }
        return;
    }

    let glidepath = config.glidepath_altitude(distance_nm, registry.elevation());
    if aircraft.approach.glideslope_intercepted {
        aircraft.target_altitude = glidepath;
    } else if gated
        && aircraft.altitude <= glidepath
        && glidepath - aircraft.altitude <= config.glideslope_capture_window
    {
        aircraft.approach.glideslope_intercepted = true;
        aircraft.target_altitude = glidepath;
        debug!(
            "{} glideslope captured at {:.0} ft",
            aircraft.callsign, aircraft.altitude
        );
    }
}

/// Side-crossing test: the bearings to the threshold from the aircraft and
/// from a point projected ahead of it lie on opposite sides of the runway
/// heading. The aircraft must also be in front of the threshold.
pub fn crosses_centerline(
    aircraft: &Aircraft,
    runway: &Runway,
    area: &AreaConfig,
    config: &ApproachConfig,
) -> bool {
    let threshold = runway.threshold();
    let ahead = project(
        aircraft.position,
        aircraft.heading,
        area.to_units(config.localizer_lookahead_nm),
    );
    let (Some(current), Some(projected)) = (
        bearing(aircraft.position, threshold),
        bearing(ahead, threshold),
    ) else {
        return false;
    };
    heading_delta(current, runway.heading()) < 90.0
        && opposite_sides(current, projected, runway.heading())
}

/// Steer back onto the centerline.
///
/// The correction angle comes from the lateral offset over the lookahead
/// distance. Of the two candidate headings either side of the runway heading
/// the one closer to the bearing to the threshold is flown, so the aircraft
/// never reverses when the offset changes sign.
fn track_localizer(
    aircraft: &mut Aircraft,
    runway: &Runway,
    area: &AreaConfig,
    config: &ApproachConfig,
) {
    let Some(to_threshold) = bearing(aircraft.position, runway.threshold()) else {
        return;
    };
    let offset_nm = area.to_nm(cross_track(
        aircraft.position,
        runway.threshold(),
        runway.heading(),
    ));
    let ratio = (offset_nm / config.localizer_lookahead_nm).clamp(-1.0, 1.0);
    let correction = rad_to_deg(ratio.asin()).abs();

    let left = normalize_heading(runway.heading() - correction);
    let right = normalize_heading(runway.heading() + correction);
    aircraft.target_heading = if heading_delta(to_threshold, left) < heading_delta(to_threshold, right) {
        left
    } else {
        right
    };
}
