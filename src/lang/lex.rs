use super::token::*;
use super::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

pub fn lex(input: &[u8]) -> Result<TokenCollection> {
    DorkLexer::lex(input)
}

fn is_dork_whitespace(byte: u8) -> bool {
    char::from(byte).is_whitespace()
}

struct DorkLexer<'a> {
    input: &'a [u8],
    pos: usize,
    output: TokenCollection,
    sections: Vec<Lexeme>,
}

impl<'a> DorkLexer<'a> {
    fn lex(input: &[u8]) -> Result<TokenCollection> {
        let mut lexer = DorkLexer {
            input,
            pos: 0,
            output: TokenCollection::with_capacity(input.len() + 2),
            sections: Vec::with_capacity(input.len() / 2 + 1),
        };
        lexer.emit(Lexeme::StartProgram);
        while let Some(&byte) = lexer.input.get(lexer.pos) {
            match lexer.sections.last() {
                Some(Lexeme::StartCommentSection) => lexer.comment(byte)?,
                Some(Lexeme::StartReadFileSection) => lexer.read_file(byte)?,
                _ => lexer.code(byte)?,
            }
            lexer.pos += 1;
        }
        if !lexer.sections.is_empty() {
            let end = input.len();
            return Err(error!(UnclosedSection, ..&(end..end)));
        }
        lexer.emit(Lexeme::EndProgram);
        Ok(lexer.output)
    }

    fn column(&self) -> Column {
        self.pos..self.pos + 1
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos + 1).copied()
    }

    fn emit(&mut self, lexeme: Lexeme) {
        self.output.push(Token::new(lexeme))
    }

    /// Rewrites the previous token in place when it is exactly `from`.
    fn escalate(&mut self, from: Lexeme, to: Lexeme) -> bool {
        match self.output.last_mut() {
            Some(token) if token.lexeme == from => {
                token.lexeme = to;
                true
            }
            _ => false,
        }
    }

    fn repeatable(&mut self, base: Lexeme, repeated: Lexeme) {
        if !self.escalate(base, repeated) {
            self.emit(base)
        }
    }

    fn modified(&mut self, base: Lexeme, modified: Lexeme) {
        if !self.escalate(Lexeme::Modifier, modified) {
            self.emit(base)
        }
    }

    /// Symbols with a repeated form and a modifier form that itself repeats.
    fn modified_repeatable(
        &mut self,
        base: Lexeme,
        repeated: Lexeme,
        modified: Lexeme,
        modified_repeated: Lexeme,
    ) {
        if self.escalate(modified, modified_repeated) {
            return;
        }
        if self.escalate(Lexeme::Modifier, modified) {
            return;
        }
        self.repeatable(base, repeated)
    }

    fn whitespace(&mut self) {
        if self.output.last_lexeme() != Lexeme::Separator {
            self.emit(Lexeme::Separator)
        }
    }

    fn open(&mut self, plain: Lexeme, escalated: Lexeme) -> Result<()> {
        if self.output.last_lexeme() != plain {
            self.emit(plain);
            self.sections.push(plain);
            return Ok(());
        }
        let column = self.column();
        match self.sections.last_mut() {
            None => return Err(error!(SectionStackEmpty, ..&column)),
            Some(top) if *top != plain => return Err(error!(SectionMismatch, ..&column)),
            Some(top) => *top = escalated,
        }
        self.escalate(plain, escalated);
        Ok(())
    }

    fn close(
        &mut self,
        byte: u8,
        (open_plain, close_plain): (Lexeme, Lexeme),
        (open_escalated, close_escalated): (Lexeme, Lexeme),
    ) -> Result<()> {
        let expected = if self.escalate(close_plain, close_escalated) {
            Some(open_escalated)
        } else {
            self.emit(close_plain);
            if self.peek() == Some(byte) {
                None
            } else {
                Some(open_plain)
            }
        };
        if self.sections.is_empty() {
            return Err(error!(SectionStackEmpty, ..&self.column()));
        }
        if let Some(expected) = expected {
            if self.sections.pop() != Some(expected) {
                return Err(error!(SectionMismatch, ..&self.column()));
            }
        }
        Ok(())
    }

    fn comment(&mut self, byte: u8) -> Result<()> {
        match byte {
            b'{' => self.open(Lexeme::StartCommentSection, Lexeme::StartReadFileSection),
            b'}' => {
                self.emit(Lexeme::EndCommentSection);
                self.sections.pop();
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn read_file(&mut self, byte: u8) -> Result<()> {
        if byte == b'}' {
            if self.peek() != Some(b'}') {
                return Err(error!(SectionMismatch, ..&self.column(); "EXPECTED }}"));
            }
            self.pos += 1;
            self.emit(Lexeme::EndReadFileSection);
            self.sections.pop();
        } else if is_dork_whitespace(byte) {
            self.whitespace();
        } else {
            match self.output.last_mut() {
                Some(token) if token.lexeme == Lexeme::Plaintext => token.data.push(byte),
                _ => self.output.push(Token::with_data(Lexeme::Plaintext, &[byte])),
            }
        }
        Ok(())
    }

    fn code(&mut self, byte: u8) -> Result<()> {
        use Lexeme::*;
        match byte {
            b'+' => self.modified_repeatable(AddOne, AddEight, AddStackPair, AddStackWhole),
            b'-' => self.modified_repeatable(
                SubtractOne,
                SubtractEight,
                SubtractStackPair,
                SubtractStackWhole,
            ),
            b'*' => self.modified_repeatable(
                MultiplyTwo,
                MultiplyEight,
                MultiplyStackPair,
                MultiplyStackWhole,
            ),
            b'/' => {
                self.modified_repeatable(DivideTwo, DivideEight, DivideStackPair, DivideStackWhole)
            }
            b'\'' => self.modified_repeatable(
                SetOneByte,
                SetEightByte,
                SetOneMebibyte,
                SetEightMebibyte,
            ),
            b'"' => self.modified_repeatable(
                SetOneKibibyte,
                SetEightKibibyte,
                SetOneGibibyte,
                SetEightGibibyte,
            ),
            b'&' => self.modified_repeatable(
                LogicalAndStackPair,
                LogicalAndStackWhole,
                LogicalAndStackPair,
                LogicalAndStackWhole,
            ),
            b'^' => self.repeatable(Square, Cube),
            b'!' => self.repeatable(PrintCharacter, PrintNumber),
            b'?' => self.repeatable(InputCharacter, InputNumber),
            b'`' => self.repeatable(SetRandomByte, SetRandomMax),
            b'@' => self.repeatable(SetSecondTimestamp, SetNanosecondTimestamp),
            b'#' => self.repeatable(HashStackOneByte, HashStackEightByte),
            b'i' => self.repeatable(IotaFromZero, IotaFromOne),
            b'$' => {
                if !self.escalate(Modifier, UseStackSwapped) {
                    self.repeatable(UseStackZero, UseStackOne)
                }
            }
            b's' => {
                if !self.escalate(Modifier, ShuffleStack) {
                    self.repeatable(SortStackAscending, SortStackDescending)
                }
            }
            b'|' => {
                if !self.escalate(Modifier, ResetState) {
                    self.repeatable(DeleteFile, ClearStack)
                }
            }
            b':' => self.modified(PushStack, CountStack),
            b';' => self.modified(PopStackLast, PopStackRandom),
            b'\\' => self.modified(Invert, Complement),
            b'~' => self.emit(SetZero),
            b'.' => self.emit(WriteStackToFile),
            b',' => self.emit(ReadStackFromFile),
            b'x' => self.emit(SwapStackTop),
            b'r' => self.emit(ReverseStack),
            b'%' => self.emit(Modifier),
            b'(' => self.open(StartAdditionSection, StartMultiplicationSection)?,
            b'[' => self.open(StartSubtractionSection, StartDivisionSection)?,
            b'<' => self.open(StartJumpIfPositiveSection, StartJumpIfZeroSection)?,
            b'{' => self.open(StartCommentSection, StartReadFileSection)?,
            b')' => self.close(
                byte,
                (StartAdditionSection, EndAdditionSection),
                (StartMultiplicationSection, EndMultiplicationSection),
            )?,
            b']' => self.close(
                byte,
                (StartSubtractionSection, EndSubtractionSection),
                (StartDivisionSection, EndDivisionSection),
            )?,
            b'>' => self.close(
                byte,
                (StartJumpIfPositiveSection, EndJumpIfPositiveSection),
                (StartJumpIfZeroSection, EndJumpIfZeroSection),
            )?,
            b'}' => {
                if self.sections.is_empty() {
                    return Err(error!(SectionStackEmpty, ..&self.column()));
                }
                return Err(error!(SectionMismatch, ..&self.column()));
            }
            _ if is_dork_whitespace(byte) => self.whitespace(),
            _ => return Err(error!(SyntaxError, ..&self.column(); "UNRECOGNIZED LEXEME")),
        }
        Ok(())
    }
}
