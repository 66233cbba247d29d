/*!
# Language Reference

A dork program is a sequence of one-character opcodes acting on an
unsigned 64-bit accumulator that starts at zero. Arithmetic wraps.
Whitespace separates opcodes that would otherwise merge.

## Repetition and the modifier

Doubling a symbol escalates it: `+` adds one and `++` adds eight.
Three in a row read as the doubled form followed by a single, so
`+++` adds nine. The modifier `%` turns the next operator into its
stack-wide form: `%+` adds the top two cells of the active stack and
`%++` adds every cell.

<pre><code>~ + + +       accumulator is 3
~ ++          accumulator is 8
'' + !        prints A
</code></pre>

## Opcodes

```text
+  add one          ++ add eight        %+ add pair       %++ add whole
-  subtract one     -- subtract eight   %- sub pair       %-- sub whole
*  multiply by two  ** multiply by 8    %* mult pair      %** mult whole
/  divide by two    // divide by 8      %/ div pair       %// modulo whole
^  square           ^^ cube
~  zero
'  8                '' 64               %' 2^23           %'' 2^26
"  2^13             "" 2^16             %" 2^33           %"" 2^36
`  random byte      `` random 64 bits
@  unix seconds     @@ unix nanoseconds
!  print character  !! print number
?  read character   ?? read number
&  and of top pair  && and of stack
$  use stack 0      $$ use stack 1      %$ toggle stack
:  push             %: count
;  pop              %; pop random cell
#  8 bit hash       ## 64 bit hash
s  sort ascending   ss sort descending  %s shuffle
x  swap top pair
r  reverse stack
i  push 0..acc      ii push 1..acc
\  invert 0 and 1   %\ bitwise complement
.  write stack to file named acc.dorkstack
,  read stack from that file
|  delete that file || clear stack      %| reset stacks and accumulator
```

`&` and `%&` are synonyms; both set the accumulator to 1 when the top
two cells are non-zero and to 0 otherwise, without popping them.

## Sections

Sections run their body against a fresh accumulator and fold the result
into the outer one.

```text
( ... )    add             (( ... ))  multiply
[ ... ]    subtract        [[ ... ]]  divide
< ... >    loop while acc > 0
<< ... >>  loop while acc = 0
{ ... }    comment         {{ path }} include a file
```

An included `.dork` file runs as a sub-program in its own directory
starting from the current accumulator, and its result replaces the
accumulator. Any other file is pushed onto the active stack so that its
first character ends on top.

The two stacks hold up to 2^20 cells each. Sub-programs work on copies
of both stacks.

*/
