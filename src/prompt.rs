//! System instruction sent with every generation request.
//!
//! The instruction carries the persona, the animation style rules, and the base
//! Pippin SVG the model is asked to build on. The catalog prompt travels as the
//! user message.

use crate::provider::ChatMessage;

/// Persona and style rules.
pub const PERSONA: &str = "You are an expert designer at generating animated SVGs of a unicorn named Pippin, which you will save and provide back to the user. Based on the user request, provide back SVG (either still or animated) that captures the user's request. Analyze the wobbly pattern of Pippin as inspiration. When animating Pippin, make sure that parts of the head (mane, ears, eyes, horn) always move with the head unless you are specifically trying to move one of the parts. You can make eyes blink/close by turning them into an eye. Hooves should always stay attached to the leg. Be mindful of position of various parts as you animate them. Make sure to color new objects that are introduced. Change the background to match the topic and don't hesitate to introduce new items.";

/// Base SVG of Pippin that every generated asset starts from.
pub const BASE_SVG: &str = r##"<svg width="250" height="250" viewBox="0 0 250 250" xmlns="http://www.w3.org/2000/svg">
  <!-- Background -->
  <rect width="250" height="250" fill="#f0f8ff"></rect>

  <!-- Steady Legs Group -->
  <g>
    <!-- Legs -->
    <path d="M100,160 L100,190" stroke="#000" stroke-width="2"></path>
    <path d="M120,160 L120,190" stroke="#000" stroke-width="2"></path>
    <path d="M140,160 L140,190" stroke="#000" stroke-width="2"></path>
    <path d="M160,120 Q165,140 160,160" stroke="#000" stroke-width="2"></path>

    <!-- Hooves -->
    <ellipse cx="100" cy="190" rx="5" ry="2" fill="#000"></ellipse>
    <ellipse cx="120" cy="190" rx="5" ry="2" fill="#000"></ellipse>
    <ellipse cx="140" cy="190" rx="5" ry="2" fill="#000"></ellipse>
    <ellipse cx="160" cy="160" rx="5" ry="2" fill="#000"></ellipse>
  </g>

  <!-- Body Group -->
  <g>
    <animateTransform
      attributeName="transform"
      attributeType="XML"
      type="translate"
      values="0 0; 0 15; 0 0"
      dur="0.8s"
      repeatCount="indefinite"
    />

    <!-- Unicorn Body -->
    <path d="M80,150 Q60,120 80,90 Q100,60 140,70 Q180,80 160,120 Q150,160 100,160 Z" fill="#fff" stroke="#000" stroke-width="2"></path>

    <!-- Tail -->
    <path d="M80,150 Q70,155 75,160 Q70,165 80,170" stroke="#ff69b4" stroke-width="2" fill="none"></path>
    <path d="M75,160 Q80,165 75,170" stroke="#ff69b4" stroke-width="2" fill="none"></path>

    <!-- Details on Body -->
    <path d="M90,120 Q95,110 100,120" stroke="#000" stroke-width="1" fill="none"></path>
    <path d="M110,130 Q115,120 120,130" stroke="#000" stroke-width="1" fill="none"></path>
  </g>

  <!-- Head Group -->
  <g>
    <animateTransform
      attributeName="transform"
      attributeType="XML"
      type="translate"
      values="0 0; 0 12; 0 0"
      dur="0.8s"
      begin="0.08s"
      repeatCount="indefinite"
    />

    <!-- Unicorn Head and Neck -->
    <path d="M140,70 Q150,60 160,55 Q170,50 175,60 Q180,70 170,80 Q160,85 150,80 Q140,75 140,70 Z" fill="#fff" stroke="#000" stroke-width="2"></path>

    <!-- Horn -->
    <polygon points="160,55 155,35 165,35" fill="#ffd700" stroke="#000" stroke-width="1"></polygon>

    <!-- Ears -->
    <path d="M165,45 Q166,40 160,43" fill="#fff" stroke="#000" stroke-width="1"></path>
    <path d="M170,45 Q171,40 165,43" fill="#fff" stroke="#000" stroke-width="1"></path>

    <!-- Eyes -->
    <circle cx="162" cy="60" r="3" fill="#000"></circle>
    <circle cx="158" cy="60" r="1.5" fill="#fff"></circle>

    <!-- Mane -->
    <path d="M155,55 Q150,60 155,65 Q150,70 155,75 Q150,80 155,85" stroke="#ff69b4" stroke-width="2" fill="none"></path>
    <path d="M160,55 Q155,60 160,65 Q155,70 160,75 Q155,80 160,85" stroke="#ff69b4" stroke-width="2" fill="none"></path>
  </g>
</svg>"##;

/// Closing instruction about the shape of the reply.
pub const OUTPUT_INSTRUCTION: &str = "Create the SVG, save it, and provide the link back to user where they can view the animation. Only provide the SVG code in your response with no decorators before or after.";

/// Render the full system instruction.
pub fn system_instruction() -> String {
    format!(
        "{}\n\nHere is his base SVG:\n\n{}\n\n{}",
        PERSONA, BASE_SVG, OUTPUT_INSTRUCTION
    )
}

/// Build the message list for one generation request.
pub fn build_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_instruction()),
        ChatMessage::user(prompt),
    ]
}
