// tests/parser.rs
use toy_robot::{parse, Bearing, Instruction, ParseError, Phase, Rotation};

#[test]
fn test_place_with_bearing() {
    for line in ["Place 1,2,East", "place 1,2,east", "  PLACE 1,2,EAST  ", "place 1, 2 , east"] {
        assert_eq!(
            parse(line, Phase::Uninitialized),
            Ok(Instruction::Place {
                x: 1,
                y: 2,
                bearing: Some(Bearing::East)
            }),
            "line {line:?}"
        );
    }
}

#[test]
fn test_place_bearing_required_until_placed() {
    assert_eq!(
        parse("Place 1,2", Phase::Uninitialized),
        Err(ParseError::BearingRequired)
    );
    assert_eq!(
        parse("Place 1,2", Phase::Placed),
        Ok(Instruction::Place {
            x: 1,
            y: 2,
            bearing: None
        })
    );
}

#[test]
fn test_place_bearing_still_validated_when_placed() {
    assert_eq!(
        parse("place 1,2,up", Phase::Placed),
        Err(ParseError::InvalidBearing)
    );
}

#[test]
fn test_place_field_errors() {
    let phase = Phase::Uninitialized;
    assert_eq!(parse("place a,2,north", phase), Err(ParseError::InvalidX));
    assert_eq!(parse("place 1,b,north", phase), Err(ParseError::InvalidY));
    // X is checked before Y.
    assert_eq!(parse("place a,b,north", phase), Err(ParseError::InvalidX));
    assert_eq!(parse("place 1,2,northeast", phase), Err(ParseError::InvalidBearing));
}

#[test]
fn test_place_shape_errors() {
    let phase = Phase::Placed;
    for line in ["place", "place 1", "place 1,2,north,4", "place 1,,north", "place 1 2 north"] {
        assert_eq!(parse(line, phase), Err(ParseError::PlaceFormat), "line {line:?}");
    }
}

#[test]
fn test_negative_coordinates_parse() {
    assert_eq!(
        parse("place -1,0,south", Phase::Uninitialized),
        Ok(Instruction::Place {
            x: -1,
            y: 0,
            bearing: Some(Bearing::South)
        })
    );
}

#[test]
fn test_bare_commands() {
    let phase = Phase::Uninitialized;
    assert_eq!(parse("move", phase), Ok(Instruction::Move));
    assert_eq!(parse("move ", phase), Ok(Instruction::Move));
    assert_eq!(parse("LEFT", phase), Ok(Instruction::Rotate(Rotation::Left)));
    assert_eq!(parse("left ", phase), Ok(Instruction::Rotate(Rotation::Left)));
    assert_eq!(parse("Right", phase), Ok(Instruction::Rotate(Rotation::Right)));
    assert_eq!(parse("report", phase), Ok(Instruction::Report));
}

#[test]
fn test_bare_commands_reject_arguments() {
    let phase = Phase::Placed;
    assert_eq!(parse("move 2", phase), Err(ParseError::MoveFormat));
    assert_eq!(parse("left now", phase), Err(ParseError::LeftFormat));
    assert_eq!(parse("right now", phase), Err(ParseError::RightFormat));
    assert_eq!(parse("report all", phase), Err(ParseError::ReportFormat));
}

#[test]
fn test_unrecognized_commands() {
    let phase = Phase::Placed;
    for line in ["mova", "lefta", "reporte", "Placeqwe 1,2,East", "jump", "", "   "] {
        assert_eq!(parse(line, phase), Err(ParseError::Unrecognized), "line {line:?}");
    }
}

#[test]
fn test_keyword_must_lead_the_line() {
    // Keywords buried in the text are not commands.
    assert_eq!(
        parse("please move", Phase::Placed),
        Err(ParseError::Unrecognized)
    );
    assert_eq!(
        parse("report move", Phase::Placed),
        Err(ParseError::ReportFormat)
    );
}

#[test]
fn test_unrecognized_message_lists_commands() {
    let message = ParseError::Unrecognized.to_string();
    let lines: Vec<&str> = message.lines().collect();
    assert_eq!(lines.len(), 6, "{message}");
    assert_eq!(lines[1], "To place the robot : Place 3,2,North");
    assert_eq!(lines[5], "To get the current location of the robot: report");
}
